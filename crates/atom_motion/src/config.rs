//! Motion configuration records

use atom_animation::{AnimatedProperty, Easing, PropertyValue, TransitionKind, DEFAULT_DURATION};
use std::time::Duration;

/// How one property of a motion animates
///
/// Start and end values may be left empty when a variant computes them from
/// the target at build time. A config without a duration takes the
/// director's default when it is scheduled.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub property: AnimatedProperty,
    pub start_value: Option<PropertyValue>,
    pub end_value: Option<PropertyValue>,
    pub easing: Easing,
    pub duration: Option<Duration>,
    pub transition_kind: TransitionKind,
}

impl MotionConfig {
    /// Config for `property` using the property's natural transition kind
    pub fn new(property: AnimatedProperty) -> Self {
        Self {
            property,
            start_value: None,
            end_value: None,
            easing: Easing::Linear,
            duration: None,
            transition_kind: property.transition_kind(),
        }
    }

    pub fn with_values(
        mut self,
        start: impl Into<PropertyValue>,
        end: impl Into<PropertyValue>,
    ) -> Self {
        self.start_value = Some(start.into());
        self.end_value = Some(end.into());
        self
    }

    pub fn with_start_value(mut self, value: impl Into<PropertyValue>) -> Self {
        self.start_value = Some(value.into());
        self
    }

    pub fn with_end_value(mut self, value: impl Into<PropertyValue>) -> Self {
        self.end_value = Some(value.into());
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Duration the transition runs for
    pub fn effective_duration(&self) -> Duration {
        self.duration.unwrap_or(DEFAULT_DURATION)
    }

    pub fn with_transition_kind(mut self, kind: TransitionKind) -> Self {
        self.transition_kind = kind;
        self
    }
}
