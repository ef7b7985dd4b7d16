//! Turning a recomputable value into an event source.
//!
//! A [`ChangeDetector`] owns a computation. Each [`ChangeDetector::check`]
//! runs it again and, if the result differs from the last one, notifies
//! every bound [`Subscriber`] with `(current, previous)`. When to call
//! `check` is the caller's business.

mod watch;

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use log::{debug, trace};

struct Callback<V> {
    active: Cell<bool>,
    call: Box<dyn Fn(Option<&V>, Option<&V>)>,
}

/// A callback receiving `(current, previous)` values.
///
/// Identity is the allocation: clones of a subscriber are the same
/// subscriber, two subscribers built from equal closures are not.
pub struct Subscriber<V>(Rc<Callback<V>>);

impl<V> Subscriber<V> {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(Option<&V>, Option<&V>) + 'static,
    {
        Self(Rc::new(Callback {
            active: Cell::new(true),
            call: Box::new(callback),
        }))
    }

    /// Whether `self` and `other` are the same subscriber.
    pub fn same(&self, other: &Subscriber<V>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Stop this subscriber on every detector it is bound to.
    ///
    /// Unlike [`ChangeDetector::unbind`] this needs no access to the
    /// detector, so it is safe to call from inside a delivery. A cancelled
    /// subscriber is not called again, including later in the delivery that
    /// is running, and detectors drop it on their next check or bind.
    pub fn cancel(&self) {
        self.0.active.set(false);
    }

    pub fn is_active(&self) -> bool {
        self.0.active.get()
    }

    fn call(&self, current: Option<&V>, previous: Option<&V>) {
        if self.is_active() {
            (self.0.call)(current, previous)
        }
    }
}

impl<V> Clone for Subscriber<V> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<V> fmt::Debug for Subscriber<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subscriber({:p})", Rc::as_ptr(&self.0))
    }
}

/// Recomputes a value on demand and notifies subscribers only when it
/// changes.
///
/// The computation returns `None` when it has no applicable value (for
/// example, its scroller is detached). That counts as "no change".
///
/// Subscribers are called while the detector is mutably borrowed, so a
/// subscriber must not reach back into its own detector (through an
/// `Rc<RefCell<_>>`, say). To stop listening from inside a callback use
/// [`Subscriber::cancel`].
pub struct ChangeDetector<V> {
    compute: Box<dyn FnMut() -> Option<V>>,
    /// Stands in for `current` until the first delivery.
    baseline: Option<V>,
    current: Option<V>,
    previous: Option<V>,
    subscribers: Vec<Subscriber<V>>,
}

impl<V: PartialEq> ChangeDetector<V> {
    pub fn new<F>(compute: F) -> Self
    where
        F: FnMut() -> Option<V> + 'static,
    {
        Self {
            compute: Box::new(compute),
            baseline: None,
            current: None,
            previous: None,
            subscribers: Vec::new(),
        }
    }

    /// Like [`ChangeDetector::new`], but until something has been
    /// delivered a computed value equal to `baseline` is not a change.
    /// The baseline itself is never delivered, not even as `previous`.
    pub fn with_baseline<F>(compute: F, baseline: V) -> Self
    where
        F: FnMut() -> Option<V> + 'static,
    {
        Self {
            baseline: Some(baseline),
            ..Self::new(compute)
        }
    }

    /// The value delivered by the last change, if any.
    pub fn current(&self) -> Option<&V> {
        self.current.as_ref()
    }

    /// The value before the last change.
    pub fn previous(&self) -> Option<&V> {
        self.previous.as_ref()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn has_subscribers(&self) -> bool {
        !self.subscribers.is_empty()
    }

    /// Add a subscriber. Binding the same subscriber again does nothing.
    ///
    /// If a value has already been delivered, the new subscriber receives
    /// the current and previous values right away, so a late subscriber
    /// doesn't have to wait for the next change.
    pub fn bind(&mut self, subscriber: Subscriber<V>) {
        self.subscribers.retain(Subscriber::is_active);
        if self.subscribers.iter().any(|s| s.same(&subscriber)) {
            trace!("[detector] {:?} already bound", subscriber);
            return;
        }
        self.subscribers.push(subscriber.clone());
        if self.current.is_some() {
            trace!("[detector] replaying current value to {:?}", subscriber);
            subscriber.call(self.current.as_ref(), self.previous.as_ref());
        }
    }

    /// Remove `subscriber`, or every subscriber if `None`.
    pub fn unbind(&mut self, subscriber: Option<&Subscriber<V>>) {
        match subscriber {
            Some(subscriber) => self.subscribers.retain(|s| !s.same(subscriber)),
            None => self.subscribers.clear(),
        }
    }

    /// Recompute the value and notify subscribers if it changed.
    /// Returns true if the value changed.
    pub fn check(&mut self) -> bool {
        self.subscribers.retain(Subscriber::is_active);

        let Some(value) = (self.compute)() else {
            trace!("[detector] no value to compare");
            return false;
        };

        let last = self.current.as_ref().or(self.baseline.as_ref());
        if last == Some(&value) {
            trace!("[detector] unchanged");
            return false;
        }

        self.previous = self.current.replace(value);
        debug!(
            "[detector] value changed, notifying {} subscribers",
            self.subscribers.len()
        );
        self.trigger();
        self.subscribers.retain(Subscriber::is_active);
        true
    }

    /// Deliver the current and previous values to every subscriber again,
    /// without recomputing.
    pub fn trigger(&self) {
        for subscriber in &self.subscribers {
            subscriber.call(self.current.as_ref(), self.previous.as_ref());
        }
    }
}

impl<V> fmt::Debug for ChangeDetector<V>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeDetector")
            .field("current", &self.current)
            .field("previous", &self.previous)
            .field("subscribers", &self.subscribers)
            .finish_non_exhaustive()
    }
}
