//! AtomUI Motion Scene
//!
//! Choreographs entry/exit animations of controls.
//!
//! # Overview
//!
//! - [`Motion`]: declares which properties animate and builds one transition
//!   per property. Concrete variants live in [`variants`]
//! - [`MotionActor`]: binds a motion to its target, owns the ghost and
//!   relays animated values
//! - [`SceneLayer`]: transparent, input-less overlay hosting a ghost
//! - [`Director`]: schedules actors and cleans up after them
//!
//! # Example
//!
//! ```ignore
//! use atom_motion::prelude::*;
//!
//! let director = Director::new(platform, MotionSettings::default());
//! let actor = MotionActor::new(target, Box::new(ZoomBigInMotion::new())).into_shared();
//! director.schedule(&actor)?;
//!
//! // From the host's frame callback
//! director.tick(director.frame_interval());
//! ```
//!
//! The host framework is reached only through the traits in [`host`].

pub mod actor;
pub mod config;
pub mod director;
pub mod error;
pub mod ghost;
pub mod host;
pub mod motion;
pub mod origin;
pub mod presets;
pub mod scene_layer;
pub mod settings;
pub mod variants;

#[cfg(test)]
mod test_support;

pub use actor::{ActorEvent, ActorEventKind, ActorId, MotionActor};
pub use config::MotionConfig;
pub use director::{Director, DirectorEvent, DirectorEventKind};
pub use error::{MotionError, Result, SettingsError};
pub use ghost::{GhostVisual, SnapshotGhostDelegate};
pub use host::{
    ActorDelegate, CaptureGhostBitmap, GhostBitmap, MotionTarget, PopupImpl, ScenePlatform,
    SurfaceChrome, TargetRef, TopLevelHandle, TransitionGate, Visual, VisualRef,
};
pub use motion::{build_transition, Motion, MotionCore};
pub use origin::TransformOriginGuard;
pub use presets::MotionPreset;
pub use scene_layer::SceneLayer;
pub use settings::MotionSettings;

/// Everything needed to define and run motions
pub mod prelude {
    pub use crate::actor::MotionActor;
    pub use crate::config::MotionConfig;
    pub use crate::director::Director;
    pub use crate::host::{MotionTarget, TargetRef, TransitionGate, Visual};
    pub use crate::motion::{Motion, MotionCore};
    pub use crate::presets::MotionPreset;
    pub use crate::settings::MotionSettings;
    pub use crate::variants::*;
    pub use atom_animation::{AnimatedProperty, Easing, PropertyValue, TransformOperations};
    pub use atom_core::{Point, RelativePoint, Size, Thickness};
}
