//! Passthrough Subject
//!
//! A stateless subject for fire-and-forget signals. Subscribers hear about
//! values sent after they subscribed and nothing before.
//!
//! The last sent value is kept only to fill in [`ChangeRecord::previous`] on
//! the next send; it is never replayed.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::change::ChangeRecord;
use super::observable::Observable;
use super::observation::Observation;
use super::subject::Subject;

/// Stateless subject: no value is delivered on subscription.
///
/// Returned observations must be retained by the caller. The subject keeps
/// no strong reference to them.
///
/// # Example
///
/// ```rust
/// use tether_core::observe::PassthroughSubject;
///
/// let taps = PassthroughSubject::new();
/// taps.send(1);
///
/// let _observation = taps.subscribe(|change| {
///     assert_eq!(*change.current(), 2);
///     assert_eq!(change.previous(), Some(&1));
/// });
/// taps.send(2);
/// ```
pub struct PassthroughSubject<T> {
    subject: Rc<Subject<T>>,
    last: RefCell<Option<T>>,
}

impl<T: Clone + 'static> PassthroughSubject<T> {
    /// Create a subject that has never sent a value.
    pub fn new() -> Self {
        Self::with_label(None)
    }

    /// Create a subject whose log events carry `label`.
    pub fn labelled(label: &'static str) -> Self {
        Self::with_label(Some(label))
    }

    fn with_label(label: Option<&'static str>) -> Self {
        Self {
            subject: Subject::new(label),
            last: RefCell::new(None),
        }
    }

    /// Deliver `value` to every current subscriber.
    ///
    /// The record's previous value is whatever was sent last, even if no one
    /// was subscribed at the time.
    ///
    /// `value` becomes the last sent value before any callback runs, so a
    /// `send` made from inside a callback reports `value` as its previous
    /// value.
    pub fn send(&self, value: T) {
        let previous = self.last.replace(Some(value.clone()));
        self.subject.broadcast(&ChangeRecord::new(value, previous));
    }

    /// Register `callback` for values sent from now on.
    pub fn subscribe<F>(&self, callback: F) -> Observation
    where
        F: Fn(&ChangeRecord<T>) + 'static,
    {
        self.observable().subscribe(callback)
    }

    /// Subscribe-only view of this subject.
    pub fn observable(&self) -> Observable<T> {
        Observable::new(Rc::clone(&self.subject), None)
    }
}

impl<T> PassthroughSubject<T> {
    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subject.subscriber_count()
    }
}

impl<T: Clone + 'static> Default for PassthroughSubject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for PassthroughSubject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassthroughSubject")
            .field("label", &self.subject.label())
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}
