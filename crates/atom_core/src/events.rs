//! Event dispatch
//!
//! Typed, single-threaded event dispatch used for lifecycle notifications.
//! Handlers are registered per event kind and invoked in registration order.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::hash::Hash;
use std::rc::Rc;

/// An event that can be routed by kind
pub trait Event {
    type Kind: Copy + Eq + Hash;

    fn kind(&self) -> Self::Kind;
}

/// Event handler function type
pub type EventHandler<E> = Rc<dyn Fn(&E)>;

/// Dispatches events to registered handlers
pub struct EventDispatcher<E: Event> {
    handlers: RefCell<FxHashMap<E::Kind, Vec<EventHandler<E>>>>,
}

impl<E: Event> EventDispatcher<E> {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(FxHashMap::default()),
        }
    }

    /// Register an event handler for an event kind
    pub fn register<F>(&self, kind: E::Kind, handler: F)
    where
        F: Fn(&E) + 'static,
    {
        self.handlers
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(Rc::new(handler));
    }

    /// Dispatch an event to all handlers registered for its kind.
    ///
    /// Handlers may register further handlers; those only see later events.
    pub fn dispatch(&self, event: &E) {
        let handlers: SmallVec<[EventHandler<E>; 4]> = match self.handlers.borrow().get(&event.kind())
        {
            Some(handlers) => handlers.iter().cloned().collect(),
            None => return,
        };
        for handler in handlers {
            handler(event);
        }
    }

    /// Number of handlers registered for a kind
    pub fn handler_count(&self, kind: E::Kind) -> usize {
        self.handlers.borrow().get(&kind).map_or(0, Vec::len)
    }
}

impl<E: Event> Default for EventDispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}
