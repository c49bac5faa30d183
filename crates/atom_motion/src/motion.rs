//! Abstract motion
//!
//! A motion declares which properties animate and how, then builds one
//! transition per property when it is posted to the director. Concrete
//! variants live in [`crate::variants`]; they own a [`MotionCore`] and
//! override the hooks they need.

use crate::config::MotionConfig;
use crate::error::{MotionError, Result};
use crate::host::{MotionTarget, TargetRef};
use crate::origin::TransformOriginGuard;
use atom_animation::{
    AnimatedProperty, DoubleTransition, PropertyValue, SharedTransition, TransformOperationsTransition,
    TransitionKind,
};
use atom_core::{combine_all, Point, RelativePoint, Signal, Size, Thickness};
use indexmap::IndexMap;
use std::time::Duration;

/// State shared by every motion variant.
#[derive(Default)]
pub struct MotionCore {
    configs: IndexMap<AnimatedProperty, MotionConfig>,
    transitions: Option<Vec<SharedTransition>>,
    completed: Option<Signal<bool>>,
    scene_inflation: Thickness,
    transform_origin: Option<RelativePoint>,
    origin_guard: Option<TransformOriginGuard>,
    running: bool,
}

impl MotionCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Core preloaded with configs whose properties are known to be distinct.
    pub(crate) fn from_configs(configs: impl IntoIterator<Item = MotionConfig>) -> Self {
        let mut core = Self::new();
        for config in configs {
            let inserted = core.add_config(config).is_ok();
            debug_assert!(inserted, "variant registered a property twice");
        }
        core
    }

    /// Register a config. The first config for a property wins.
    pub fn add_config(&mut self, config: MotionConfig) -> Result<()> {
        if self.configs.contains_key(&config.property) {
            return Err(MotionError::DuplicateConfig(config.property));
        }
        self.configs.insert(config.property, config);
        Ok(())
    }

    pub fn config(&self, property: AnimatedProperty) -> Option<&MotionConfig> {
        self.configs.get(&property)
    }

    pub fn configs(&self) -> impl Iterator<Item = &MotionConfig> {
        self.configs.values()
    }

    /// Give `duration` to every config that has none. Configs are frozen
    /// once transitions are built.
    pub fn fill_default_duration(&mut self, duration: Duration) {
        if self.transitions.is_some() {
            return;
        }
        for config in self.configs.values_mut() {
            config.duration.get_or_insert(duration);
        }
    }

    pub fn scene_inflation(&self) -> Thickness {
        self.scene_inflation
    }

    pub fn set_scene_inflation(&mut self, inflation: Thickness) {
        self.scene_inflation = inflation;
    }

    /// Origin applied to the target while the motion runs
    pub fn transform_origin(&self) -> Option<RelativePoint> {
        self.transform_origin
    }

    pub fn set_transform_origin(&mut self, origin: Option<RelativePoint>) {
        self.transform_origin = origin;
    }

    /// Transitions built so far, if any
    pub fn transitions(&self) -> Option<&[SharedTransition]> {
        self.transitions.as_deref()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Apply the configured transform origin to `target` until released.
    pub fn engage_transform_origin(&mut self, target: &TargetRef) {
        if let Some(origin) = self.transform_origin {
            self.origin_guard = Some(TransformOriginGuard::engage(target, origin));
        }
    }

    pub fn release_transform_origin(&mut self) {
        if let Some(guard) = self.origin_guard.take() {
            guard.release();
        }
    }
}

/// A declarative animation over one or more properties of a control.
pub trait Motion {
    fn core(&self) -> &MotionCore;

    fn core_mut(&mut self) -> &mut MotionCore;

    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Fill in or adjust a config from the live target before its
    /// transition is built.
    fn notify_pre_build_transition(&mut self, _config: &mut MotionConfig, _target: &dyn MotionTarget) {}

    fn notify_build_transition(&self, config: &MotionConfig) -> Result<SharedTransition> {
        build_transition(config)
    }

    fn notify_pre_start(&mut self, target: &TargetRef) {
        let core = self.core_mut();
        core.engage_transform_origin(target);
        core.running = true;
    }

    fn notify_started(&mut self) {}

    /// Undo whatever ambient state `notify_pre_start` changed.
    fn notify_stopped(&mut self, _target: &TargetRef) {
        let core = self.core_mut();
        core.release_transform_origin();
        core.running = false;
    }

    /// Size of the scene layer hosting a ghost of `actor_size`.
    fn calculate_scene_size(&self, actor_size: Size) -> Size {
        actor_size.inflate(self.core().scene_inflation)
    }

    /// Position of the scene layer for a ghost placed at `actor_position`.
    fn calculate_scene_position(&self, _actor_size: Size, actor_position: Point) -> Point {
        let inflation = self.core().scene_inflation;
        actor_position.offset(-inflation.left, -inflation.top)
    }

    /// Resting position of the ghost inside its scene layer.
    fn calculate_ghost_offset(&self, _actor_size: Size) -> Point {
        Point::ZERO
    }

    fn add_motion_config(&mut self, config: MotionConfig) -> Result<()> {
        self.core_mut().add_config(config)
    }

    fn motion_config(&self, property: AnimatedProperty) -> Option<&MotionConfig> {
        self.core().config(property)
    }

    fn motion_configs(&self) -> Vec<&MotionConfig> {
        self.core().configs().collect()
    }

    fn activated_properties(&self) -> Vec<AnimatedProperty> {
        self.core().configs.keys().copied().collect()
    }

    /// Build one transition per config.
    ///
    /// Transitions are built once; later calls return the same list. The
    /// combined completion signal becomes available afterwards.
    fn build_transitions(&mut self, target: &dyn MotionTarget) -> Result<Vec<SharedTransition>> {
        if let Some(transitions) = &self.core().transitions {
            return Ok(transitions.clone());
        }

        let configs: Vec<MotionConfig> = self.core().configs.values().cloned().collect();
        let mut transitions = Vec::with_capacity(configs.len());
        for mut config in configs {
            if !target.supports_motion_property(config.property) {
                return Err(MotionError::UnsupportedProperty(config.property));
            }
            self.notify_pre_build_transition(&mut config, target);
            transitions.push(self.notify_build_transition(&config)?);
            self.core_mut().configs.insert(config.property, config);
        }

        let signals: Vec<Signal<bool>> = transitions.iter().map(|t| t.borrow().completed()).collect();
        let core = self.core_mut();
        core.completed = Some(combine_all(&signals));
        core.transitions = Some(transitions.clone());
        tracing::debug!(motion = self.name(), count = transitions.len(), "built motion transitions");
        Ok(transitions)
    }

    /// True once every transition has completed. `None` before building.
    fn completed_signal(&self) -> Option<Signal<bool>> {
        self.core().completed.clone()
    }
}

/// Build the transition matching a config's kind.
pub fn build_transition(config: &MotionConfig) -> Result<SharedTransition> {
    let property = config.property;
    let start = config.start_value.ok_or(MotionError::MissingValue {
        property,
        endpoint: "start",
    })?;
    let end = config.end_value.ok_or(MotionError::MissingValue {
        property,
        endpoint: "end",
    })?;
    let mismatch = MotionError::KindMismatch {
        property,
        kind: config.transition_kind,
    };
    if property.transition_kind() != config.transition_kind {
        return Err(mismatch);
    }

    let transition = match (config.transition_kind, start, end) {
        (TransitionKind::Double, PropertyValue::Double(from), PropertyValue::Double(to)) => {
            DoubleTransition::new(property, from, to)
                .with_duration(config.effective_duration())
                .with_easing(config.easing)
                .into_shared()
        }
        (
            TransitionKind::TransformOperations,
            PropertyValue::Transform(from),
            PropertyValue::Transform(to),
        ) => TransformOperationsTransition::new(property, from, to)
            .with_duration(config.effective_duration())
            .with_easing(config.easing)
            .into_shared(),
        _ => return Err(mismatch),
    };
    Ok(transition)
}
