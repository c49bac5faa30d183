//! Concrete motions
//!
//! Every variant pairs an opacity config with a render-transform config
//! (fades use opacity only). `new` leaves the duration to the director's
//! settings; `with_timing` fixes it. An easing of `None` selects the
//! variant's default curve.

/// Declares an opacity + render-transform motion with fixed endpoints.
macro_rules! motion_variant {
    (
        $(#[$meta:meta])*
        $name:ident {
            name: $label:literal,
            easing: $easing:expr,
            origin: $origin:expr,
            opacity: ($opacity_from:expr, $opacity_to:expr),
            transform: ($transform_from:expr, $transform_to:expr) $(,)?
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            core: $crate::motion::MotionCore,
        }

        impl $name {
            pub const DEFAULT_EASING: ::atom_animation::Easing = $easing;

            pub fn new() -> Self {
                Self::configured(None, None)
            }

            pub fn with_timing(
                duration: ::std::time::Duration,
                easing: Option<::atom_animation::Easing>,
            ) -> Self {
                Self::configured(Some(duration), easing)
            }

            fn configured(
                duration: Option<::std::time::Duration>,
                easing: Option<::atom_animation::Easing>,
            ) -> Self {
                let easing = easing.unwrap_or(Self::DEFAULT_EASING);
                let mut core = $crate::motion::MotionCore::from_configs([
                    Self::configure_opacity(duration, easing),
                    Self::configure_render_transform(duration, easing),
                ]);
                core.set_transform_origin($origin);
                Self { core }
            }

            pub fn configure_opacity(
                duration: Option<::std::time::Duration>,
                easing: ::atom_animation::Easing,
            ) -> $crate::config::MotionConfig {
                $crate::config::MotionConfig {
                    duration,
                    ..$crate::config::MotionConfig::new(::atom_animation::AnimatedProperty::Opacity)
                        .with_values($opacity_from, $opacity_to)
                        .with_easing(easing)
                }
            }

            pub fn configure_render_transform(
                duration: Option<::std::time::Duration>,
                easing: ::atom_animation::Easing,
            ) -> $crate::config::MotionConfig {
                $crate::config::MotionConfig {
                    duration,
                    ..$crate::config::MotionConfig::new(::atom_animation::AnimatedProperty::RenderTransform)
                        .with_values($transform_from, $transform_to)
                        .with_easing(easing)
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::motion::Motion for $name {
            fn core(&self) -> &$crate::motion::MotionCore {
                &self.core
            }

            fn core_mut(&mut self) -> &mut $crate::motion::MotionCore {
                &mut self.core
            }

            fn name(&self) -> &'static str {
                $label
            }
        }
    };
}

mod collapse;
mod fade;
mod moves;
mod slide;
mod zoom;

pub use collapse::*;
pub use fade::{FadeInMotion, FadeOutMotion};
pub use moves::*;
pub use slide::*;
pub use zoom::*;
