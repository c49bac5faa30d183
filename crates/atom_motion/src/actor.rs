//! Motion actor
//!
//! Binds one motion to one target. The actor owns the ghost (when the motion
//! plays in a scene layer), relays animated values onto it, and drives the
//! motion's transitions through its own [`AnimationScheduler`].
//!
//! Lifecycle, as driven by the [`Director`](crate::Director):
//!
//! 1. `notify_posted_to_director` builds transitions, disables the target's
//!    ambient transitions and builds the ghost
//! 2. `notify_scene_layer_created` / `notify_motion_target_added_to_scene`
//! 3. `notify_motion_pre_start`, `dispatch_transitions`, `notify_motion_started`
//! 4. `advance` each frame until the combined completion fires
//! 5. `notify_motion_completed` restores ambient state

use crate::error::Result;
use crate::ghost::SnapshotGhostDelegate;
use crate::host::{ActorDelegate, MotionTarget, TargetRef, VisualRef};
use crate::motion::Motion;
use crate::scene_layer::SceneLayer;
use atom_animation::{AnimationScheduler, TransitionFrame};
use atom_core::{Event, EventDispatcher, Point, Signal, Size, SubscriptionId};
use std::cell::{Cell, Ref, RefCell};
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static NEXT_ACTOR_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique actor identity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(u64);

impl ActorId {
    fn next() -> Self {
        ActorId(NEXT_ACTOR_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActorEventKind {
    PreStart,
    Started,
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActorEvent {
    pub actor: ActorId,
    pub kind: ActorEventKind,
}

impl Event for ActorEvent {
    type Kind = ActorEventKind;

    fn kind(&self) -> ActorEventKind {
        self.kind
    }
}

/// Where animated values are written
#[derive(Clone)]
enum RelayTarget {
    Ghost(VisualRef),
    Target(Weak<RefCell<dyn MotionTarget>>),
}

impl RelayTarget {
    fn apply(&self, frame: &TransitionFrame) {
        match self {
            RelayTarget::Ghost(ghost) => ghost.borrow_mut().set_motion_value(frame.property, &frame.value),
            RelayTarget::Target(target) => {
                if let Some(target) = target.upgrade() {
                    target.borrow_mut().set_motion_value(frame.property, &frame.value);
                }
            }
        }
    }
}

/// A motion bound to the control it animates.
pub struct MotionActor {
    id: ActorId,
    target: TargetRef,
    motion: RefCell<Box<dyn Motion>>,
    delegate: Box<dyn ActorDelegate>,
    dispatch_in_scene_layer: bool,
    ghost: RefCell<Option<VisualRef>>,
    relay: RefCell<Option<RelayTarget>>,
    scheduler: RefCell<AnimationScheduler>,
    completion: RefCell<Option<(Signal<bool>, SubscriptionId)>>,
    completed_status: Cell<bool>,
    posted: Cell<bool>,
    events: EventDispatcher<ActorEvent>,
}

impl MotionActor {
    pub fn new(target: TargetRef, motion: Box<dyn Motion>) -> Self {
        Self {
            id: ActorId::next(),
            target,
            motion: RefCell::new(motion),
            delegate: Box::new(SnapshotGhostDelegate::default()),
            dispatch_in_scene_layer: true,
            ghost: RefCell::new(None),
            relay: RefCell::new(None),
            scheduler: RefCell::new(AnimationScheduler::new()),
            completion: RefCell::new(None),
            completed_status: Cell::new(true),
            posted: Cell::new(false),
            events: EventDispatcher::new(),
        }
    }

    /// Play the motion on a ghost in a scene layer (default) or in place
    /// on the target itself.
    pub fn with_dispatch_in_scene_layer(mut self, dispatch: bool) -> Self {
        self.dispatch_in_scene_layer = dispatch;
        self
    }

    pub fn with_delegate(mut self, delegate: impl ActorDelegate + 'static) -> Self {
        self.delegate = Box::new(delegate);
        self
    }

    pub fn into_shared(self) -> Rc<Self> {
        Rc::new(self)
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn target(&self) -> &TargetRef {
        &self.target
    }

    pub fn motion(&self) -> Ref<'_, Box<dyn Motion>> {
        self.motion.borrow()
    }

    pub fn ghost(&self) -> Option<VisualRef> {
        self.ghost.borrow().clone()
    }

    pub fn is_dispatch_in_scene_layer(&self) -> bool {
        self.dispatch_in_scene_layer
    }

    /// False while the motion is in flight
    pub fn completed_status(&self) -> bool {
        self.completed_status.get()
    }

    pub fn is_posted(&self) -> bool {
        self.posted.get()
    }

    pub fn transition_count(&self) -> usize {
        self.scheduler.borrow().transition_count()
    }

    /// Configs the motion left without a duration run for `duration`.
    pub fn set_default_duration(&self, duration: Duration) {
        self.motion.borrow_mut().core_mut().fill_default_duration(duration);
    }

    pub fn set_target_fps(&self, fps: u32) {
        self.scheduler.borrow_mut().set_target_fps(fps);
    }

    /// Register a lifecycle handler.
    pub fn on_event<F>(&self, kind: ActorEventKind, handler: F)
    where
        F: Fn(&ActorEvent) + 'static,
    {
        self.events.register(kind, handler);
    }

    /// Prepare the actor for running. Later calls are no-ops.
    pub fn notify_posted_to_director(self: &Rc<Self>) -> Result<()> {
        if self.posted.get() {
            return Ok(());
        }

        let transitions = self
            .motion
            .borrow_mut()
            .build_transitions(&*self.target.borrow())?;

        self.target.borrow_mut().disable_transitions();

        let relay = if self.dispatch_in_scene_layer {
            let ghost = self.delegate.build_ghost(&self.target);
            *self.ghost.borrow_mut() = Some(ghost.clone());
            RelayTarget::Ghost(ghost)
        } else {
            RelayTarget::Target(Rc::downgrade(&self.target))
        };
        *self.relay.borrow_mut() = Some(relay);

        {
            let mut scheduler = self.scheduler.borrow_mut();
            scheduler.clear();
            for transition in transitions {
                scheduler.add_transition(transition);
            }
        }

        let completed = self.motion.borrow().completed_signal();
        if let Some(signal) = completed {
            let actor = Rc::downgrade(self);
            let subscription = signal.subscribe(move |done| {
                if !*done {
                    return;
                }
                if let Some(actor) = actor.upgrade() {
                    actor.notify_motion_completed();
                }
            });
            *self.completion.borrow_mut() = Some((signal, subscription));
        }

        self.completed_status.set(false);
        self.posted.set(true);
        tracing::debug!(
            actor = self.id.0,
            motion = self.motion.borrow().name(),
            in_scene_layer = self.dispatch_in_scene_layer,
            "actor posted"
        );
        Ok(())
    }

    /// Where the ghost starts: the target's own position when playing in
    /// place, otherwise the delegate's top-level position.
    pub fn calculate_ghost_position(&self) -> Point {
        if self.dispatch_in_scene_layer {
            self.delegate.top_level_ghost_position(&self.target)
        } else {
            self.target.borrow().position_in_parent().unwrap_or(Point::ZERO)
        }
    }

    pub fn notify_scene_layer_created(&self, layer: &mut SceneLayer) {
        let Some(ghost) = self.ghost() else {
            return;
        };
        let ghost_size = {
            let mut ghost = ghost.borrow_mut();
            if ghost.desired_size() == Size::default() {
                ghost.measure(Size::INFINITY);
            }
            ghost.desired_size()
        };
        let position = self.calculate_ghost_position();
        let motion = self.motion.borrow();
        layer.move_and_resize(
            motion.calculate_scene_position(ghost_size, position),
            motion.calculate_scene_size(ghost_size),
        );
    }

    /// Pin the ghost inside the layer. The layer itself carries the screen
    /// position, so the ghost sits at the origin unless the motion travels
    /// up or left of it.
    pub fn notify_motion_target_added_to_scene(&self) {
        if let Some(ghost) = self.ghost() {
            let size = ghost.borrow().desired_size();
            let offset = self.motion.borrow().calculate_ghost_offset(size);
            ghost.borrow_mut().set_position(offset);
        }
    }

    pub fn notify_motion_pre_start(&self) {
        self.motion.borrow_mut().notify_pre_start(&self.target);
        if let Some(ghost) = self.ghost() {
            let origin = self.target.borrow().render_transform_origin();
            ghost.borrow_mut().set_render_transform_origin(origin);
        }
        self.emit(ActorEventKind::PreStart);
    }

    /// Start every installed transition, writing start values to the relay.
    pub fn dispatch_transitions(&self) {
        let Some(relay) = self.relay.borrow().clone() else {
            return;
        };
        self.scheduler.borrow_mut().start_all(|frame| relay.apply(frame));
    }

    pub fn notify_motion_started(&self) {
        self.motion.borrow_mut().notify_started();
        self.emit(ActorEventKind::Started);
    }

    /// Restore ambient state once every transition has finished.
    /// Only the first call after posting has an effect.
    pub fn notify_motion_completed(&self) {
        if self.completed_status.get() {
            return;
        }
        self.completed_status.set(true);

        self.motion.borrow_mut().notify_stopped(&self.target);
        if self.dispatch_in_scene_layer {
            self.settle_end_values();
        }
        self.target.borrow_mut().enable_transitions();

        if let Some((signal, subscription)) = self.completion.borrow_mut().take() {
            signal.unsubscribe(subscription);
        }

        tracing::debug!(actor = self.id.0, "actor completed");
        self.emit(ActorEventKind::Completed);
    }

    /// Advance the motion by one frame of `dt`.
    pub fn advance(&self, dt: Duration) -> usize {
        if self.completed_status.get() {
            return 0;
        }
        let Some(relay) = self.relay.borrow().clone() else {
            return 0;
        };
        let finished = self.scheduler.borrow_mut().tick(dt, |frame| relay.apply(frame));
        finished.raise()
    }

    /// Advance by the wall-clock time since the previous frame.
    pub fn advance_now(&self) -> usize {
        if self.completed_status.get() {
            return 0;
        }
        let Some(relay) = self.relay.borrow().clone() else {
            return 0;
        };
        let finished = self.scheduler.borrow_mut().tick_now(|frame| relay.apply(frame));
        finished.raise()
    }

    /// Jump every running transition to its end value.
    pub fn finish(&self) -> usize {
        let Some(relay) = self.relay.borrow().clone() else {
            return 0;
        };
        let finished = self.scheduler.borrow_mut().finish_all(|frame| relay.apply(frame));
        finished.raise()
    }

    /// The ghost animated in a scene layer never reaches the target, so the
    /// target takes the final values directly.
    fn settle_end_values(&self) {
        let motion = self.motion.borrow();
        let Some(transitions) = motion.core().transitions() else {
            return;
        };
        let mut target = self.target.borrow_mut();
        for transition in transitions {
            let transition = transition.borrow();
            target.set_motion_value(transition.property(), &transition.end_value());
        }
    }

    fn emit(&self, kind: ActorEventKind) {
        self.events.dispatch(&ActorEvent { actor: self.id, kind });
    }
}
