//! AtomUI Animation System
//!
//! Property transitions and the frame scheduler that drives them.
//!
//! # Features
//!
//! - **Easing**: polynomial, circular and cubic-bezier curves
//! - **Transitions**: scalar and composite-transform interpolation with a
//!   completion signal on every transition
//! - **Scheduler**: advances installed transitions frame by frame and raises
//!   completion only after the final value has been applied

pub mod easing;
pub mod property;
pub mod scheduler;
pub mod transform;
pub mod transition;

pub use easing::Easing;
pub use property::{AnimatedProperty, PropertyValue, TransitionKind};
pub use scheduler::{AnimationScheduler, FinishedTransitions, TransitionId};
pub use transform::TransformOperations;
pub use transition::{
    DoubleTransition, Interpolate, PropertyTransition, SharedTransition, Transition,
    TransitionFrame, TransformOperationsTransition, TransitionValue, DEFAULT_DURATION,
};
