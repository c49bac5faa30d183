//! Push-based signals
//!
//! A [`Signal`] holds a value and notifies subscribers synchronously whenever
//! the value changes. Signals are single-threaded (`Rc` based) and cheap to
//! clone: every clone observes and mutates the same underlying value.
//!
//! [`combine_all`] derives a boolean signal that is `true` only while every
//! input signal is `true`. It is used to fold per-property transition
//! completion into one "motion finished" signal.
//!
//! # Example
//!
//! ```rust
//! use atom_core::signal::{combine_all, Signal};
//!
//! let opacity_done = Signal::new(false);
//! let scale_done = Signal::new(false);
//! let all_done = combine_all(&[opacity_done.clone(), scale_done.clone()]);
//!
//! opacity_done.set(true);
//! assert!(!all_done.get());
//! scale_done.set(true);
//! assert!(all_done.get());
//! ```

use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Handle returned by [`Signal::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber<T> {
    id: SubscriptionId,
    callback: Box<dyn FnMut(&T)>,
}

struct SignalInner<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<Subscriber<T>>>,
    /// Unsubscribes requested while a notification pass was running
    pending_removals: RefCell<SmallVec<[SubscriptionId; 2]>>,
    next_id: Cell<u64>,
}

/// A shared, observable value
pub struct Signal<T> {
    inner: Rc<SignalInner<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &*self.inner.value.borrow())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(SignalInner {
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
                pending_removals: RefCell::new(SmallVec::new()),
                next_id: Cell::new(1),
            }),
        }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Set the value, notifying subscribers if it changed.
    ///
    /// Returns `true` when subscribers were notified.
    pub fn set(&self, value: T) -> bool {
        {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                return false;
            }
            *current = value.clone();
        }
        self.notify(&value);
        true
    }

    /// Register a callback invoked with every new value
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner.subscribers.borrow_mut().push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a subscription. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.subscribers.borrow_mut();
        if let Some(index) = subscribers.iter().position(|s| s.id == id) {
            subscribers.remove(index);
            return true;
        }
        // Possibly mid-notification: the list is detached until the pass ends
        self.inner.pending_removals.borrow_mut().push(id);
        false
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// True if both handles observe the same value
    pub fn ptr_eq(&self, other: &Signal<T>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn notify(&self, value: &T) {
        // Detach the list so callbacks may subscribe, read or set freely.
        let mut active = std::mem::take(&mut *self.inner.subscribers.borrow_mut());
        for subscriber in active.iter_mut() {
            (subscriber.callback)(value);
        }

        let mut subscribers = self.inner.subscribers.borrow_mut();
        let added = std::mem::take(&mut *subscribers);
        active.extend(added);

        let removals = std::mem::take(&mut *self.inner.pending_removals.borrow_mut());
        if !removals.is_empty() {
            active.retain(|s| !removals.contains(&s.id));
        }
        *subscribers = active;
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Derive a signal that is `true` only while every input is `true`.
///
/// The result is recomputed whenever any input emits, and only emits itself
/// when the conjunction changes. An empty input list yields `true`.
pub fn combine_all(inputs: &[Signal<bool>]) -> Signal<bool> {
    let flags: Rc<RefCell<SmallVec<[bool; 4]>>> =
        Rc::new(RefCell::new(inputs.iter().map(Signal::get).collect()));
    let combined = Signal::new(flags.borrow().iter().all(|done| *done));

    for (index, input) in inputs.iter().enumerate() {
        let flags = Rc::clone(&flags);
        let combined = combined.clone();
        input.subscribe(move |value| {
            let all = {
                let mut flags = flags.borrow_mut();
                flags[index] = *value;
                flags.iter().all(|done| *done)
            };
            combined.set(all);
        });
    }

    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_notifies_only_on_change() {
        let signal = Signal::new(1);
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        signal.subscribe(move |_| hits_clone.set(hits_clone.get() + 1));

        assert!(signal.set(2));
        assert!(!signal.set(2));
        assert!(signal.set(3));
        assert_eq!(hits.get(), 2);
        assert_eq!(signal.get(), 3);
    }

    #[test]
    fn test_unsubscribe() {
        let signal = Signal::new(false);
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        let id = signal.subscribe(move |_| hits_clone.set(hits_clone.get() + 1));

        assert!(signal.unsubscribe(id));
        signal.set(true);
        assert_eq!(hits.get(), 0);
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn test_callback_can_read_and_subscribe_during_notify() {
        let signal = Signal::new(0);
        let observed = Rc::new(Cell::new(0));
        let (signal_clone, observed_clone) = (signal.clone(), observed.clone());
        signal.subscribe(move |_| {
            observed_clone.set(signal_clone.get());
            signal_clone.subscribe(|_| {});
        });

        signal.set(7);
        assert_eq!(observed.get(), 7);
        assert_eq!(signal.subscriber_count(), 2);
    }

    #[test]
    fn test_combine_all_waits_for_every_input() {
        let inputs: Vec<Signal<bool>> = (0..3).map(|_| Signal::new(false)).collect();
        let combined = combine_all(&inputs);
        let emissions = Rc::new(RefCell::new(Vec::new()));
        let emissions_clone = emissions.clone();
        combined.subscribe(move |v| emissions_clone.borrow_mut().push(*v));

        inputs[2].set(true);
        inputs[0].set(true);
        assert!(!combined.get());
        inputs[1].set(true);

        assert!(combined.get());
        assert_eq!(*emissions.borrow(), vec![true]);
    }

    #[test]
    fn test_combine_all_empty_is_true() {
        assert!(combine_all(&[]).get());
    }
}
