//! Property transitions
//!
//! A transition interpolates one property from a start value to an end value
//! over a fixed duration. Every transition exposes a completion [`Signal`]
//! that flips to `true` once the end value has been delivered.
//!
//! Transitions do not drive themselves: a frame loop (see
//! [`AnimationScheduler`](crate::AnimationScheduler)) advances them with
//! [`Transition::tick`] and is responsible for raising completion after the
//! final frame has been applied.

use crate::easing::Easing;
use crate::property::{AnimatedProperty, PropertyValue, TransitionKind};
use crate::transform::TransformOperations;
use atom_core::Signal;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Default transition duration
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Values that can be blended between two endpoints
pub trait Interpolate: Sized {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        from + (to - from) * t
    }
}

/// A value type a [`PropertyTransition`] can carry
pub trait TransitionValue: Interpolate + Clone + Into<PropertyValue> + 'static {
    const KIND: TransitionKind;
}

impl TransitionValue for f64 {
    const KIND: TransitionKind = TransitionKind::Double;
}

impl TransitionValue for TransformOperations {
    const KIND: TransitionKind = TransitionKind::TransformOperations;
}

/// One frame produced by a transition
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionFrame {
    pub property: AnimatedProperty,
    pub value: PropertyValue,
    /// True on the frame that delivers the end value
    pub finished: bool,
}

/// Interpolation of a single property over time
pub trait Transition {
    fn property(&self) -> AnimatedProperty;

    fn kind(&self) -> TransitionKind;

    fn duration(&self) -> Duration;

    fn easing(&self) -> Easing;

    fn start_value(&self) -> PropertyValue;

    fn end_value(&self) -> PropertyValue;

    /// Rewind to the start value and begin running
    fn start(&mut self);

    fn is_running(&self) -> bool;

    /// Linear time progress (0.0 to 1.0)
    fn progress(&self) -> f64;

    /// Value at the current (eased) progress
    fn current_value(&self) -> PropertyValue;

    /// Advance by `dt`. Returns `None` when the transition is not running.
    fn tick(&mut self, dt: Duration) -> Option<TransitionFrame>;

    /// Jump straight to the end value. Returns `None` when not running.
    fn finish(&mut self) -> Option<TransitionFrame>;

    /// Completion signal, `true` once the end value has been applied
    fn completed(&self) -> Signal<bool>;
}

/// Shared handle to a transition, owned jointly by a motion and its scheduler
pub type SharedTransition = Rc<RefCell<dyn Transition>>;

/// Generic transition over any [`TransitionValue`]
pub struct PropertyTransition<V: TransitionValue> {
    property: AnimatedProperty,
    from: V,
    to: V,
    duration: Duration,
    easing: Easing,
    elapsed: Duration,
    running: bool,
    completed: Signal<bool>,
}

/// Scalar transition (opacity, width, height)
pub type DoubleTransition = PropertyTransition<f64>;

/// Composite translate/scale transition
pub type TransformOperationsTransition = PropertyTransition<TransformOperations>;

impl<V: TransitionValue> PropertyTransition<V> {
    pub fn new(property: AnimatedProperty, from: V, to: V) -> Self {
        Self {
            property,
            from,
            to,
            duration: DEFAULT_DURATION,
            easing: Easing::Linear,
            elapsed: Duration::ZERO,
            running: false,
            completed: Signal::new(false),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Wrap into a [`SharedTransition`]
    pub fn into_shared(self) -> SharedTransition {
        Rc::new(RefCell::new(self))
    }

    fn value_at(&self, progress: f64) -> V {
        V::interpolate(&self.from, &self.to, self.easing.apply(progress))
    }

    fn frame(&self, value: V, finished: bool) -> TransitionFrame {
        TransitionFrame {
            property: self.property,
            value: value.into(),
            finished,
        }
    }
}

impl<V: TransitionValue> Transition for PropertyTransition<V> {
    fn property(&self) -> AnimatedProperty {
        self.property
    }

    fn kind(&self) -> TransitionKind {
        V::KIND
    }

    fn duration(&self) -> Duration {
        self.duration
    }

    fn easing(&self) -> Easing {
        self.easing
    }

    fn start_value(&self) -> PropertyValue {
        self.from.clone().into()
    }

    fn end_value(&self) -> PropertyValue {
        self.to.clone().into()
    }

    fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = true;
        self.completed.set(false);
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return if self.running { 0.0 } else { 1.0 };
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    fn current_value(&self) -> PropertyValue {
        self.value_at(self.progress()).into()
    }

    fn tick(&mut self, dt: Duration) -> Option<TransitionFrame> {
        if !self.running {
            return None;
        }

        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        if self.elapsed >= self.duration {
            return self.finish();
        }

        let value = self.value_at(self.progress());
        Some(self.frame(value, false))
    }

    fn finish(&mut self) -> Option<TransitionFrame> {
        if !self.running {
            return None;
        }
        self.elapsed = self.duration;
        self.running = false;
        Some(self.frame(self.to.clone(), true))
    }

    fn completed(&self) -> Signal<bool> {
        self.completed.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_transition_interpolates_linearly() {
        let mut transition = DoubleTransition::new(AnimatedProperty::Opacity, 0.0, 1.0)
            .with_duration(Duration::from_millis(300));
        transition.start();

        let frame = transition.tick(Duration::from_millis(150)).unwrap();
        assert_eq!(frame.property, AnimatedProperty::Opacity);
        assert!((frame.value.as_double().unwrap() - 0.5).abs() < 1e-9);
        assert!(!frame.finished);

        let frame = transition.tick(Duration::from_millis(200)).unwrap();
        assert_eq!(frame.value, PropertyValue::Double(1.0));
        assert!(frame.finished);
        assert!(!transition.is_running());
        assert!(transition.tick(Duration::from_millis(16)).is_none());
    }

    #[test]
    fn test_tick_does_not_raise_completion() {
        let mut transition = DoubleTransition::new(AnimatedProperty::Width, 10.0, 20.0)
            .with_duration(Duration::ZERO);
        transition.start();

        let frame = transition.tick(Duration::ZERO).unwrap();
        assert!(frame.finished);
        // Completion is raised by the driver after the frame is applied
        assert!(!transition.completed().get());
    }

    #[test]
    fn test_huge_step_finishes_without_overflow() {
        let mut transition = DoubleTransition::new(AnimatedProperty::Height, 0.0, 40.0);
        transition.start();
        transition.tick(Duration::from_millis(100));

        let frame = transition.tick(Duration::MAX).unwrap();
        assert!(frame.finished);
        assert_eq!(frame.value, PropertyValue::Double(40.0));
    }

    #[test]
    fn test_transform_transition_uses_easing() {
        let mut transition = TransformOperationsTransition::new(
            AnimatedProperty::RenderTransform,
            TransformOperations::scale(1.0, 0.8),
            TransformOperations::IDENTITY,
        )
        .with_easing(Easing::EaseOutQuint)
        .with_duration(Duration::from_millis(100));
        transition.start();

        let frame = transition.tick(Duration::from_millis(50)).unwrap();
        let scale_y = frame.value.as_transform().unwrap().scale.1;
        let expected = 0.8 + 0.2 * Easing::EaseOutQuint.apply(0.5);
        assert!((scale_y - expected).abs() < 1e-9);
        assert_eq!(transition.kind(), TransitionKind::TransformOperations);
    }

    #[test]
    fn test_restart_resets_completion() {
        let mut transition = DoubleTransition::new(AnimatedProperty::Opacity, 1.0, 0.0);
        transition.start();
        transition.finish();
        transition.completed().set(true);

        transition.start();
        assert!(!transition.completed().get());
        assert_eq!(transition.current_value(), PropertyValue::Double(1.0));
    }
}
