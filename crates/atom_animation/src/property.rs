//! Animatable properties and their values

use crate::transform::TransformOperations;
use std::fmt;

/// Attributes the motion system knows how to animate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnimatedProperty {
    Opacity,
    Width,
    Height,
    RenderTransform,
}

impl AnimatedProperty {
    pub const ALL: [AnimatedProperty; 4] = [
        AnimatedProperty::Opacity,
        AnimatedProperty::Width,
        AnimatedProperty::Height,
        AnimatedProperty::RenderTransform,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AnimatedProperty::Opacity => "opacity",
            AnimatedProperty::Width => "width",
            AnimatedProperty::Height => "height",
            AnimatedProperty::RenderTransform => "render-transform",
        }
    }

    /// The interpolation kind values of this property require
    pub fn transition_kind(&self) -> TransitionKind {
        match self {
            AnimatedProperty::Opacity | AnimatedProperty::Width | AnimatedProperty::Height => {
                TransitionKind::Double
            }
            AnimatedProperty::RenderTransform => TransitionKind::TransformOperations,
        }
    }
}

impl fmt::Display for AnimatedProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interpolation math a transition uses
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Eased linear blend of two numbers
    Double,
    /// Component-wise blend of translate/scale operations
    TransformOperations,
}

/// A typed property value
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropertyValue {
    Double(f64),
    Transform(TransformOperations),
}

impl PropertyValue {
    pub fn kind(&self) -> TransitionKind {
        match self {
            PropertyValue::Double(_) => TransitionKind::Double,
            PropertyValue::Transform(_) => TransitionKind::TransformOperations,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            PropertyValue::Double(value) => Some(*value),
            PropertyValue::Transform(_) => None,
        }
    }

    pub fn as_transform(&self) -> Option<TransformOperations> {
        match self {
            PropertyValue::Transform(value) => Some(*value),
            PropertyValue::Double(_) => None,
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Double(value)
    }
}

impl From<TransformOperations> for PropertyValue {
    fn from(value: TransformOperations) -> Self {
        PropertyValue::Transform(value)
    }
}
