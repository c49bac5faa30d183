//! Director
//!
//! Schedules actors, allocates a scene layer for every actor that plays in
//! one, and tears the layer down once the actor's motion completes.
//!
//! The director is a cheap handle; clones share one tracking table.
//!
//! A scheduled motion cannot be cancelled. Once posted, an actor runs until
//! its combined completion fires.

use crate::actor::{ActorEventKind, ActorId, MotionActor};
use crate::error::Result;
use crate::host::ScenePlatform;
use crate::scene_layer::SceneLayer;
use crate::settings::MotionSettings;
use atom_core::{Event, EventDispatcher};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirectorEventKind {
    PreStart,
    Started,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectorEvent {
    pub actor: ActorId,
    pub kind: DirectorEventKind,
}

impl Event for DirectorEvent {
    type Kind = DirectorEventKind;

    fn kind(&self) -> DirectorEventKind {
        self.kind
    }
}

/// Cleanup owed for one running actor
struct SceneDisposer {
    layer: Option<SceneLayer>,
}

impl SceneDisposer {
    fn dispose(mut self) {
        if let Some(mut layer) = self.layer.take() {
            layer.hide();
            layer.dispose();
        }
    }
}

struct TrackedActor {
    actor: Rc<MotionActor>,
    disposer: SceneDisposer,
}

struct DirectorInner {
    platform: Box<dyn ScenePlatform>,
    settings: MotionSettings,
    tracked: RefCell<FxHashMap<ActorId, TrackedActor>>,
    events: EventDispatcher<DirectorEvent>,
}

/// Runs motion actors.
#[derive(Clone)]
pub struct Director {
    inner: Rc<DirectorInner>,
}

impl Director {
    pub fn new(platform: impl ScenePlatform + 'static, settings: MotionSettings) -> Self {
        Self {
            inner: Rc::new(DirectorInner {
                platform: Box::new(platform),
                settings,
                tracked: RefCell::new(FxHashMap::default()),
                events: EventDispatcher::new(),
            }),
        }
    }

    pub fn settings(&self) -> &MotionSettings {
        &self.inner.settings
    }

    /// Nominal frame interval for the configured frame rate
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.inner.settings.target_fps.max(1) as f64)
    }

    /// Post `actor` and start its motion.
    ///
    /// Scheduling an actor that is already running (or has already run) is a
    /// no-op: one actor never gets a second entry, ghost or scene layer.
    pub fn schedule(&self, actor: &Rc<MotionActor>) -> Result<()> {
        let id = actor.id();
        if actor.is_posted() || self.is_tracking(id) {
            tracing::trace!(actor = id.raw(), "actor already scheduled");
            return Ok(());
        }

        let settings = &self.inner.settings;
        actor.set_target_fps(settings.target_fps);
        actor.set_default_duration(settings.default_duration());
        actor.notify_posted_to_director()?;

        let layer = if actor.is_dispatch_in_scene_layer() && settings.enabled {
            Some(self.create_scene_layer(actor))
        } else {
            None
        };
        self.inner.tracked.borrow_mut().insert(
            id,
            TrackedActor {
                actor: actor.clone(),
                disposer: SceneDisposer { layer },
            },
        );

        let director = Rc::downgrade(&self.inner);
        actor.on_event(ActorEventKind::Completed, move |event| {
            if let Some(inner) = Weak::upgrade(&director) {
                Director { inner }.handle_completed(event.actor);
            }
        });
        tracing::debug!(actor = id.raw(), motion = actor.motion().name(), "actor scheduled");

        actor.notify_motion_pre_start();
        self.emit(id, DirectorEventKind::PreStart);
        actor.dispatch_transitions();
        actor.notify_motion_started();
        self.emit(id, DirectorEventKind::Started);

        if !settings.enabled {
            actor.finish();
        }
        if actor.transition_count() == 0 {
            actor.notify_motion_completed();
        }
        Ok(())
    }

    fn create_scene_layer(&self, actor: &MotionActor) -> SceneLayer {
        let parent = actor.target().borrow().top_level();
        let popup = self.inner.platform.create_popup(parent);
        let mut layer = SceneLayer::new(parent, popup);

        actor.notify_scene_layer_created(&mut layer);
        if let Some(ghost) = actor.ghost() {
            layer.set_motion_target(ghost);
            actor.notify_motion_target_added_to_scene();
        }
        layer.show();
        layer
    }

    /// Remove and dispose the entry of a completed actor. Unknown actors
    /// are ignored.
    pub fn handle_completed(&self, id: ActorId) {
        let entry = self.inner.tracked.borrow_mut().remove(&id);
        let Some(entry) = entry else {
            tracing::trace!(actor = id.raw(), "completion for untracked actor ignored");
            return;
        };
        entry.disposer.dispose();
        tracing::debug!(actor = id.raw(), "actor finished");
        self.emit(id, DirectorEventKind::Finished);
    }

    /// Advance every running actor by `dt`. Returns the number still running.
    pub fn tick(&self, dt: Duration) -> usize {
        for actor in self.running_actors() {
            actor.advance(dt);
        }
        self.tracked_count()
    }

    /// Advance every running actor by wall-clock time.
    pub fn tick_now(&self) -> usize {
        for actor in self.running_actors() {
            actor.advance_now();
        }
        self.tracked_count()
    }

    pub fn tracked_count(&self) -> usize {
        self.inner.tracked.borrow().len()
    }

    pub fn is_tracking(&self, id: ActorId) -> bool {
        self.inner.tracked.borrow().contains_key(&id)
    }

    pub fn has_running_motions(&self) -> bool {
        !self.inner.tracked.borrow().is_empty()
    }

    pub fn on_pre_start<F>(&self, handler: F)
    where
        F: Fn(&DirectorEvent) + 'static,
    {
        self.inner.events.register(DirectorEventKind::PreStart, handler);
    }

    pub fn on_started<F>(&self, handler: F)
    where
        F: Fn(&DirectorEvent) + 'static,
    {
        self.inner.events.register(DirectorEventKind::Started, handler);
    }

    pub fn on_finished<F>(&self, handler: F)
    where
        F: Fn(&DirectorEvent) + 'static,
    {
        self.inner.events.register(DirectorEventKind::Finished, handler);
    }

    /// Snapshot taken so actors may complete (and leave the table) mid-tick.
    fn running_actors(&self) -> SmallVec<[Rc<MotionActor>; 4]> {
        self.inner
            .tracked
            .borrow()
            .values()
            .map(|tracked| tracked.actor.clone())
            .collect()
    }

    fn emit(&self, actor: ActorId, kind: DirectorEventKind) {
        self.inner.events.dispatch(&DirectorEvent { actor, kind });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{TestPlatform, TestTarget};
    use crate::variants::{FadeInMotion, FadeOutMotion, SlideUpInMotion};
    use atom_animation::{AnimatedProperty, PropertyValue};

    fn director() -> (Director, Rc<RefCell<crate::test_support::PopupLog>>) {
        let platform = TestPlatform::default();
        let log = platform.log.clone();
        (Director::new(platform, MotionSettings::default()), log)
    }

    #[test]
    fn test_schedule_twice_tracks_once() {
        let (director, log) = director();
        let actor = MotionActor::new(TestTarget::shared(), Box::new(SlideUpInMotion::new())).into_shared();

        director.schedule(&actor).unwrap();
        director.schedule(&actor).unwrap();

        assert_eq!(director.tracked_count(), 1);
        assert_eq!(log.borrow().created, 1);
        assert_eq!(log.borrow().shows, 1);
    }

    #[test]
    fn test_completion_disposes_layer() {
        let (director, log) = director();
        let actor = MotionActor::new(TestTarget::shared(), Box::new(FadeInMotion::new(0.0))).into_shared();
        director.schedule(&actor).unwrap();

        assert_eq!(director.tick(Duration::from_millis(100)), 1);
        assert_eq!(director.tick(Duration::from_millis(200)), 0);
        assert!(!director.is_tracking(actor.id()));
        assert_eq!(log.borrow().disposes, 1);
    }

    #[test]
    fn test_unknown_completion_is_ignored() {
        let (director, _log) = director();
        let actor = MotionActor::new(TestTarget::shared(), Box::new(FadeInMotion::new(0.0)));
        director.handle_completed(actor.id());
        assert_eq!(director.tracked_count(), 0);
    }

    #[test]
    fn test_in_place_actor_gets_no_layer() {
        let (director, log) = director();
        let actor = MotionActor::new(TestTarget::shared(), Box::new(FadeInMotion::new(0.0)))
            .with_dispatch_in_scene_layer(false)
            .into_shared();
        director.schedule(&actor).unwrap();

        assert!(director.is_tracking(actor.id()));
        assert_eq!(log.borrow().created, 0);
    }

    #[test]
    fn test_clones_share_table() {
        let (director, _log) = director();
        let other = director.clone();
        let actor = MotionActor::new(TestTarget::shared(), Box::new(FadeInMotion::new(0.0))).into_shared();
        director.schedule(&actor).unwrap();
        assert!(other.is_tracking(actor.id()));
    }

    #[test]
    fn test_default_duration_comes_from_settings() {
        let settings = MotionSettings {
            default_duration_ms: 50,
            ..MotionSettings::default()
        };
        let director = Director::new(TestPlatform::default(), settings);
        let actor = MotionActor::new(TestTarget::shared(), Box::new(FadeOutMotion::new())).into_shared();
        director.schedule(&actor).unwrap();
        assert_eq!(director.tick(Duration::from_millis(60)), 0);

        // An explicit duration wins over the setting
        let timed = FadeOutMotion::with_timing(Duration::from_millis(200), None);
        let actor = MotionActor::new(TestTarget::shared(), Box::new(timed)).into_shared();
        director.schedule(&actor).unwrap();
        assert_eq!(director.tick(Duration::from_millis(60)), 1);
    }

    #[test]
    fn test_finished_handler_may_drive_actor() {
        let (director, _log) = director();
        let actor = MotionActor::new(TestTarget::shared(), Box::new(FadeInMotion::new(0.0))).into_shared();
        let counts = Rc::new(RefCell::new(Vec::new()));
        let record = counts.clone();
        let handle = Rc::downgrade(&actor);
        director.on_finished(move |_| {
            if let Some(actor) = handle.upgrade() {
                record.borrow_mut().push(actor.transition_count());
                actor.finish();
            }
        });

        director.schedule(&actor).unwrap();
        director.tick(Duration::from_millis(300));
        assert_eq!(*counts.borrow(), vec![1]);
        assert!(!director.has_running_motions());
    }

    #[test]
    fn test_tick_now_runs_motion_to_completion() {
        let (director, _log) = director();
        let target = TestTarget::shared();
        let motion = FadeInMotion::with_timing(0.0, Duration::from_millis(30), None);
        let actor = MotionActor::new(target.clone(), Box::new(motion))
            .with_dispatch_in_scene_layer(false)
            .into_shared();
        director.schedule(&actor).unwrap();

        std::thread::sleep(Duration::from_millis(5));
        director.tick_now();
        let opacity = target
            .borrow()
            .last_value(AnimatedProperty::Opacity)
            .and_then(|value| value.as_double());
        assert!(opacity.is_some_and(|opacity| opacity > 0.0));

        let mut frames_left = 200;
        while director.tick_now() > 0 {
            frames_left -= 1;
            assert!(frames_left > 0, "wall-clock frames never completed the motion");
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(!director.is_tracking(actor.id()));
        assert_eq!(
            target.borrow().last_value(AnimatedProperty::Opacity),
            Some(PropertyValue::Double(1.0))
        );
    }

    #[test]
    fn test_frame_interval_follows_settings() {
        let settings = MotionSettings {
            target_fps: 50,
            ..MotionSettings::default()
        };
        let director = Director::new(TestPlatform::default(), settings);
        assert_eq!(director.frame_interval(), Duration::from_millis(20));
    }
}
