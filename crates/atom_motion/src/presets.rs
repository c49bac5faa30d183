//! Named motion presets
//!
//! Lets controls pick a motion by name (e.g. from a theme or settings file)
//! instead of naming a concrete type.

use crate::error::MotionError;
use crate::motion::Motion;
use crate::variants::*;
use atom_animation::Easing;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

macro_rules! presets {
    ($($preset:ident => $motion:ident, $name:literal;)*) => {
        /// Every built-in motion, by name
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum MotionPreset {
            FadeIn,
            $($preset,)*
        }

        impl MotionPreset {
            pub const ALL: &'static [MotionPreset] = &[MotionPreset::FadeIn, $(MotionPreset::$preset,)*];

            /// Name used in logs and settings files
            pub fn name(&self) -> &'static str {
                match self {
                    MotionPreset::FadeIn => "fade-in",
                    $(MotionPreset::$preset => $name,)*
                }
            }

            /// Build the motion with its default timing. The duration is
            /// left to the director's settings. Fades start from fully
            /// transparent.
            pub fn create(&self) -> Box<dyn Motion> {
                match self {
                    MotionPreset::FadeIn => Box::new(FadeInMotion::new(0.0)),
                    $(MotionPreset::$preset => Box::new($motion::new()),)*
                }
            }

            /// Build the motion with the given duration and optional easing
            /// override.
            pub fn build_with(&self, duration: Duration, easing: Option<Easing>) -> Box<dyn Motion> {
                match self {
                    MotionPreset::FadeIn => Box::new(FadeInMotion::with_timing(0.0, duration, easing)),
                    $(MotionPreset::$preset => Box::new($motion::with_timing(duration, easing)),)*
                }
            }
        }

        impl FromStr for MotionPreset {
            type Err = MotionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    "fade-in" => Ok(MotionPreset::FadeIn),
                    $($name => Ok(MotionPreset::$preset),)*
                    other => Err(MotionError::UnknownPreset(other.to_string())),
                }
            }
        }
    };
}

presets! {
    FadeOut => FadeOutMotion, "fade-out";
    SlideUpIn => SlideUpInMotion, "slide-up-in";
    SlideUpOut => SlideUpOutMotion, "slide-up-out";
    SlideDownIn => SlideDownInMotion, "slide-down-in";
    SlideDownOut => SlideDownOutMotion, "slide-down-out";
    SlideLeftIn => SlideLeftInMotion, "slide-left-in";
    SlideLeftOut => SlideLeftOutMotion, "slide-left-out";
    SlideRightIn => SlideRightInMotion, "slide-right-in";
    SlideRightOut => SlideRightOutMotion, "slide-right-out";
    ZoomIn => ZoomInMotion, "zoom-in";
    ZoomOut => ZoomOutMotion, "zoom-out";
    ZoomBigIn => ZoomBigInMotion, "zoom-big-in";
    ZoomBigOut => ZoomBigOutMotion, "zoom-big-out";
    ZoomUpIn => ZoomUpInMotion, "zoom-up-in";
    ZoomUpOut => ZoomUpOutMotion, "zoom-up-out";
    ZoomDownIn => ZoomDownInMotion, "zoom-down-in";
    ZoomDownOut => ZoomDownOutMotion, "zoom-down-out";
    ZoomLeftIn => ZoomLeftInMotion, "zoom-left-in";
    ZoomLeftOut => ZoomLeftOutMotion, "zoom-left-out";
    ZoomRightIn => ZoomRightInMotion, "zoom-right-in";
    ZoomRightOut => ZoomRightOutMotion, "zoom-right-out";
    MoveUpIn => MoveUpInMotion, "move-up-in";
    MoveUpOut => MoveUpOutMotion, "move-up-out";
    MoveDownIn => MoveDownInMotion, "move-down-in";
    MoveDownOut => MoveDownOutMotion, "move-down-out";
    MoveLeftIn => MoveLeftInMotion, "move-left-in";
    MoveLeftOut => MoveLeftOutMotion, "move-left-out";
    MoveRightIn => MoveRightInMotion, "move-right-in";
    MoveRightOut => MoveRightOutMotion, "move-right-out";
    CollapseTop => CollapseTopMotion, "collapse-top";
    CollapseBottom => CollapseBottomMotion, "collapse-bottom";
    CollapseLeft => CollapseLeftMotion, "collapse-left";
    CollapseRight => CollapseRightMotion, "collapse-right";
    ExpandTop => ExpandTopMotion, "expand-top";
    ExpandBottom => ExpandBottomMotion, "expand-bottom";
    ExpandLeft => ExpandLeftMotion, "expand-left";
    ExpandRight => ExpandRightMotion, "expand-right";
}

impl MotionPreset {
    pub fn build(&self, duration: Duration) -> Box<dyn Motion> {
        self.build_with(duration, None)
    }
}

impl fmt::Display for MotionPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
