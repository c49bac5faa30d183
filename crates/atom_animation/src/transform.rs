//! Composite render transforms
//!
//! A [`TransformOperations`] value is a translate-then-scale descriptor.
//! Transitions blend the components independently instead of lerping matrix
//! elements, so intermediate frames never pick up spurious rotation or skew.

use crate::transition::Interpolate;

/// Translate + scale descriptor applied around a transform origin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformOperations {
    /// Translation in x and y
    pub translate: (f64, f64),
    /// Scale in x and y (1.0 = no scale)
    pub scale: (f64, f64),
}

impl TransformOperations {
    /// Identity transform (no transformation)
    pub const IDENTITY: Self = Self {
        translate: (0.0, 0.0),
        scale: (1.0, 1.0),
    };

    /// Create a translation transform
    pub const fn translate(x: f64, y: f64) -> Self {
        Self {
            translate: (x, y),
            scale: (1.0, 1.0),
        }
    }

    /// Create a scale transform
    pub const fn scale(x: f64, y: f64) -> Self {
        Self {
            translate: (0.0, 0.0),
            scale: (x, y),
        }
    }

    /// Create a uniform scale transform
    pub const fn scale_uniform(scale: f64) -> Self {
        Self::scale(scale, scale)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for TransformOperations {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Interpolate for TransformOperations {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        Self {
            translate: (
                f64::interpolate(&from.translate.0, &to.translate.0, t),
                f64::interpolate(&from.translate.1, &to.translate.1, t),
            ),
            scale: (
                f64::interpolate(&from.scale.0, &to.scale.0, t),
                f64::interpolate(&from.scale.1, &to.scale.1, t),
            ),
        }
    }
}
