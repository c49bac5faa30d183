//! Translation motions
//!
//! The travel distance is the target's own desired size, so it is only known
//! when transitions are built. The scene layer spans both the resting box and
//! the box at the far end of travel.

use crate::config::MotionConfig;
use crate::host::MotionTarget;
use atom_animation::{AnimatedProperty, TransformOperations};
use atom_core::{Point, Size, Thickness};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Travel {
    /// Arrive from the offset at the resting position.
    In,
    /// Leave the resting position towards the offset.
    Out,
}

fn up_offset(size: Size) -> TransformOperations {
    TransformOperations::translate(0.0, -size.height)
}

fn down_offset(size: Size) -> TransformOperations {
    TransformOperations::translate(0.0, size.height)
}

fn left_offset(size: Size) -> TransformOperations {
    TransformOperations::translate(-size.width, 0.0)
}

fn right_offset(size: Size) -> TransformOperations {
    TransformOperations::translate(size.width, 0.0)
}

fn fill_translation(
    config: &mut MotionConfig,
    target: &dyn MotionTarget,
    travel: Travel,
    offset: fn(Size) -> TransformOperations,
) {
    if config.property != AnimatedProperty::RenderTransform {
        return;
    }
    let offset = offset(target.desired_size());
    let (from, to) = match travel {
        Travel::In => (offset, TransformOperations::IDENTITY),
        Travel::Out => (TransformOperations::IDENTITY, offset),
    };
    config.start_value = Some(from.into());
    config.end_value = Some(to.into());
}

fn travel_scene_size(size: Size, offset: TransformOperations, inflation: Thickness) -> Size {
    let (dx, dy) = offset.translate;
    Size::new(size.width + dx.abs(), size.height + dy.abs()).inflate(inflation)
}

fn travel_scene_position(position: Point, offset: TransformOperations, inflation: Thickness) -> Point {
    let (dx, dy) = offset.translate;
    position.offset(dx.min(0.0) - inflation.left, dy.min(0.0) - inflation.top)
}

/// Room left above or to the left of the resting ghost for upward or
/// leftward travel
fn travel_ghost_offset(offset: TransformOperations) -> Point {
    let (dx, dy) = offset.translate;
    Point::new(-dx.min(0.0), -dy.min(0.0))
}

macro_rules! move_variant {
    (
        $(#[$meta:meta])*
        $name:ident {
            name: $label:literal,
            easing: $easing:expr,
            travel: $travel:expr,
            offset: $offset:path,
            opacity: ($opacity_from:expr, $opacity_to:expr) $(,)?
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
                Self {
                    core: $crate::motion::MotionCore::from_configs([
                        Self::configure_opacity(duration, easing),
                        Self::configure_render_transform(duration, easing),
                    ]),
                }
            }

            pub fn configure_opacity(
                duration: Option<::std::time::Duration>,
                easing: ::atom_animation::Easing,
            ) -> MotionConfig {
                MotionConfig {
                    duration,
                    ..MotionConfig::new(AnimatedProperty::Opacity)
                        .with_values($opacity_from, $opacity_to)
                        .with_easing(easing)
                }
            }

            /// Endpoints are filled in from the target's desired size.
            pub fn configure_render_transform(
                duration: Option<::std::time::Duration>,
                easing: ::atom_animation::Easing,
            ) -> MotionConfig {
                MotionConfig {
                    duration,
                    ..MotionConfig::new(AnimatedProperty::RenderTransform).with_easing(easing)
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

            fn notify_pre_build_transition(&mut self, config: &mut MotionConfig, target: &dyn MotionTarget) {
                fill_translation(config, target, $travel, $offset);
            }

            fn calculate_scene_size(&self, actor_size: Size) -> Size {
                travel_scene_size(actor_size, $offset(actor_size), self.core.scene_inflation())
            }

            fn calculate_scene_position(&self, actor_size: Size, actor_position: Point) -> Point {
                travel_scene_position(actor_position, $offset(actor_size), self.core.scene_inflation())
            }

            fn calculate_ghost_offset(&self, actor_size: Size) -> Point {
                travel_ghost_offset($offset(actor_size))
            }
        }
    };
}

move_variant! {
    /// Rises into place from one height above.
    MoveUpInMotion {
        name: "move-up-in",
        easing: ::atom_animation::Easing::EaseOutCirc,
        travel: Travel::In,
        offset: up_offset,
        opacity: (0.0, 1.0),
    }
}

move_variant! {
    MoveUpOutMotion {
        name: "move-up-out",
        easing: ::atom_animation::Easing::EaseInOutCirc,
        travel: Travel::Out,
        offset: up_offset,
        opacity: (1.0, 0.0),
    }
}

move_variant! {
    MoveDownInMotion {
        name: "move-down-in",
        easing: ::atom_animation::Easing::EaseOutCirc,
        travel: Travel::In,
        offset: down_offset,
        opacity: (0.0, 1.0),
    }
}

move_variant! {
    MoveDownOutMotion {
        name: "move-down-out",
        easing: ::atom_animation::Easing::EaseInOutCirc,
        travel: Travel::Out,
        offset: down_offset,
        opacity: (1.0, 0.0),
    }
}

move_variant! {
    MoveLeftInMotion {
        name: "move-left-in",
        easing: ::atom_animation::Easing::EaseOutCirc,
        travel: Travel::In,
        offset: left_offset,
        opacity: (0.0, 1.0),
    }
}

move_variant! {
    MoveLeftOutMotion {
        name: "move-left-out",
        easing: ::atom_animation::Easing::EaseInOutCirc,
        travel: Travel::Out,
        offset: left_offset,
        opacity: (1.0, 0.0),
    }
}

move_variant! {
    MoveRightInMotion {
        name: "move-right-in",
        easing: ::atom_animation::Easing::EaseOutCirc,
        travel: Travel::In,
        offset: right_offset,
        opacity: (0.0, 1.0),
    }
}

move_variant! {
    MoveRightOutMotion {
        name: "move-right-out",
        easing: ::atom_animation::Easing::EaseInOutCirc,
        travel: Travel::Out,
        offset: right_offset,
        opacity: (1.0, 0.0),
    }
}
