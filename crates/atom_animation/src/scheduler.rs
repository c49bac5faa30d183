//! Animation scheduler
//!
//! Holds installed transitions and advances them each frame. Frames are
//! handed to a sink during the tick; completion is raised afterwards through
//! the returned [`FinishedTransitions`], once the caller has released
//! whatever it borrowed to drive the scheduler.

use crate::transition::{SharedTransition, TransitionFrame};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::time::{Duration, Instant};

new_key_type! {
    pub struct TransitionId;
}

/// The animation scheduler that ticks installed transitions
pub struct AnimationScheduler {
    transitions: SlotMap<TransitionId, SharedTransition>,
    last_frame: Option<Instant>,
    target_fps: u32,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            transitions: SlotMap::with_key(),
            last_frame: None,
            target_fps: 120,
        }
    }

    pub fn set_target_fps(&mut self, fps: u32) {
        self.target_fps = fps.max(1);
    }

    /// Nominal frame interval for the configured frame rate
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps as f64)
    }

    pub fn add_transition(&mut self, transition: SharedTransition) -> TransitionId {
        self.transitions.insert(transition)
    }

    pub fn clear(&mut self) {
        self.transitions.clear();
        self.last_frame = None;
    }

    /// Start every installed transition from its start value.
    ///
    /// Each start value is reported to the sink so the animated object
    /// begins from a known state.
    pub fn start_all(&mut self, mut sink: impl FnMut(&TransitionFrame)) {
        for (_, transition) in self.transitions.iter() {
            let frame = {
                let mut transition = transition.borrow_mut();
                transition.start();
                TransitionFrame {
                    property: transition.property(),
                    value: transition.start_value(),
                    finished: false,
                }
            };
            sink(&frame);
        }
        self.last_frame = Some(Instant::now());
    }

    /// Advance every running transition by `dt`.
    ///
    /// Returns the transitions that finished on this frame. Their completion
    /// is raised by [`FinishedTransitions::raise`].
    pub fn tick(&mut self, dt: Duration, mut sink: impl FnMut(&TransitionFrame)) -> FinishedTransitions {
        let mut finished = SmallVec::new();
        for (id, transition) in self.transitions.iter() {
            let frame = transition.borrow_mut().tick(dt);
            let Some(frame) = frame else {
                continue;
            };
            tracing::trace!(?id, property = %frame.property, value = ?frame.value, "transition frame");
            sink(&frame);
            if frame.finished {
                finished.push(transition.clone());
            }
        }
        FinishedTransitions(finished)
    }

    /// Advance using wall-clock time since the previous frame
    pub fn tick_now(&mut self, sink: impl FnMut(&TransitionFrame)) -> FinishedTransitions {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| now - last)
            .unwrap_or_else(|| self.frame_interval());
        self.last_frame = Some(now);
        self.tick(dt, sink)
    }

    /// Jump every running transition to its end value
    pub fn finish_all(&mut self, mut sink: impl FnMut(&TransitionFrame)) -> FinishedTransitions {
        let mut finished = SmallVec::new();
        for (_, transition) in self.transitions.iter() {
            let frame = transition.borrow_mut().finish();
            if let Some(frame) = frame {
                sink(&frame);
                finished.push(transition.clone());
            }
        }
        FinishedTransitions(finished)
    }

    /// Check if any transitions are still running
    pub fn has_active_transitions(&self) -> bool {
        self.transitions
            .iter()
            .any(|(_, t)| t.borrow().is_running())
    }

    /// Get the number of installed transitions
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Transitions that reached their end value on one frame
#[must_use = "completion is only raised by `raise`"]
pub struct FinishedTransitions(SmallVec<[SharedTransition; 4]>);

impl FinishedTransitions {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Set each completion signal and return how many were raised.
    ///
    /// No transition is borrowed while a signal fires, so completion
    /// observers may inspect any transition freely.
    pub fn raise(self) -> usize {
        for transition in &self.0 {
            let signal = transition.borrow().completed();
            signal.set(true);
        }
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{AnimatedProperty, PropertyValue};
    use crate::transition::DoubleTransition;
    use atom_core::combine_all;

    fn opacity(duration_ms: u64) -> SharedTransition {
        DoubleTransition::new(AnimatedProperty::Opacity, 0.0, 1.0)
            .with_duration(Duration::from_millis(duration_ms))
            .into_shared()
    }

    #[test]
    fn test_start_all_reports_start_values() {
        let mut scheduler = AnimationScheduler::new();
        scheduler.add_transition(opacity(100));

        let mut frames = Vec::new();
        scheduler.start_all(|frame| frames.push(frame.clone()));

        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].value, PropertyValue::Double(0.0));
        assert!(scheduler.has_active_transitions());
    }

    #[test]
    fn test_completion_raised_after_final_frame() {
        let mut scheduler = AnimationScheduler::new();
        let fast = opacity(50);
        let slow = opacity(200);
        scheduler.add_transition(fast.clone());
        scheduler.add_transition(slow.clone());

        let all_done = combine_all(&[fast.borrow().completed(), slow.borrow().completed()]);
        scheduler.start_all(|_| {});

        assert_eq!(scheduler.tick(Duration::from_millis(100), |_| {}).raise(), 1);
        assert!(fast.borrow().completed().get());
        assert!(!all_done.get());

        assert_eq!(scheduler.tick(Duration::from_millis(100), |_| {}).raise(), 1);
        assert!(all_done.get());
        assert!(!scheduler.has_active_transitions());
    }

    #[test]
    fn test_finish_all_jumps_to_end() {
        let mut scheduler = AnimationScheduler::new();
        let transition = opacity(1000);
        scheduler.add_transition(transition.clone());
        scheduler.start_all(|_| {});

        let mut last = None;
        assert_eq!(scheduler.finish_all(|frame| last = Some(frame.value)).raise(), 1);
        assert_eq!(last, Some(PropertyValue::Double(1.0)));
        assert!(transition.borrow().completed().get());
        assert_eq!(scheduler.finish_all(|_| {}).raise(), 0);
    }

    #[test]
    fn test_completion_waits_for_raise() {
        let mut scheduler = AnimationScheduler::new();
        let transition = opacity(50);
        scheduler.add_transition(transition.clone());
        scheduler.start_all(|_| {});

        let finished = scheduler.tick(Duration::from_millis(60), |_| {});
        assert_eq!(finished.len(), 1);
        assert!(!transition.borrow().completed().get());

        assert_eq!(finished.raise(), 1);
        assert!(transition.borrow().completed().get());
    }

    #[test]
    fn test_tick_now_falls_back_to_frame_interval() {
        let mut scheduler = AnimationScheduler::new();
        scheduler.set_target_fps(10);
        let transition = opacity(50);
        scheduler.add_transition(transition.clone());

        // Started outside `start_all`, so no previous frame time exists
        transition.borrow_mut().start();
        assert_eq!(scheduler.tick_now(|_| {}).raise(), 1);
        assert!(transition.borrow().completed().get());
    }
}
