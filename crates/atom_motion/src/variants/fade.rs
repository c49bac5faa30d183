use crate::config::MotionConfig;
use crate::motion::{Motion, MotionCore};
use atom_animation::{AnimatedProperty, Easing};
use std::time::Duration;

/// Fades a control in from `origin_opacity` to fully opaque.
pub struct FadeInMotion {
    core: MotionCore,
    origin_opacity: f64,
}

impl FadeInMotion {
    pub const DEFAULT_EASING: Easing = Easing::Linear;

    pub fn new(origin_opacity: f64) -> Self {
        Self::configured(origin_opacity, None, None)
    }

    pub fn with_timing(origin_opacity: f64, duration: Duration, easing: Option<Easing>) -> Self {
        Self::configured(origin_opacity, Some(duration), easing)
    }

    fn configured(origin_opacity: f64, duration: Option<Duration>, easing: Option<Easing>) -> Self {
        let easing = easing.unwrap_or(Self::DEFAULT_EASING);
        Self {
            core: MotionCore::from_configs([Self::configure_opacity(origin_opacity, duration, easing)]),
            origin_opacity,
        }
    }

    pub fn configure_opacity(origin_opacity: f64, duration: Option<Duration>, easing: Easing) -> MotionConfig {
        MotionConfig {
            duration,
            ..MotionConfig::new(AnimatedProperty::Opacity)
                .with_values(origin_opacity, 1.0)
                .with_easing(easing)
        }
    }

    pub fn origin_opacity(&self) -> f64 {
        self.origin_opacity
    }
}

impl Default for FadeInMotion {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Motion for FadeInMotion {
    fn core(&self) -> &MotionCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MotionCore {
        &mut self.core
    }

    fn name(&self) -> &'static str {
        "fade-in"
    }
}

/// Fades a control out to fully transparent.
pub struct FadeOutMotion {
    core: MotionCore,
}

impl FadeOutMotion {
    pub const DEFAULT_EASING: Easing = Easing::Linear;

    pub fn new() -> Self {
        Self::configured(None, None)
    }

    pub fn with_timing(duration: Duration, easing: Option<Easing>) -> Self {
        Self::configured(Some(duration), easing)
    }

    fn configured(duration: Option<Duration>, easing: Option<Easing>) -> Self {
        let easing = easing.unwrap_or(Self::DEFAULT_EASING);
        Self {
            core: MotionCore::from_configs([Self::configure_opacity(duration, easing)]),
        }
    }

    pub fn configure_opacity(duration: Option<Duration>, easing: Easing) -> MotionConfig {
        MotionConfig {
            duration,
            ..MotionConfig::new(AnimatedProperty::Opacity)
                .with_values(1.0, 0.0)
                .with_easing(easing)
        }
    }
}

impl Default for FadeOutMotion {
    fn default() -> Self {
        Self::new()
    }
}

impl Motion for FadeOutMotion {
    fn core(&self) -> &MotionCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MotionCore {
        &mut self.core
    }

    fn name(&self) -> &'static str {
        "fade-out"
    }
}
