//! Observable Views
//!
//! An [`Observable`] is the read-only face of a subject. Producers keep the
//! mutable [`PropertySubject`] or [`PassthroughSubject`] to themselves and
//! hand consumers an `Observable`, which can only subscribe.
//!
//! The view remembers the subscription policy of the subject it came from:
//! a view of a property replays the current value to each new subscriber,
//! a view of a passthrough does not.
//!
//! [`PropertySubject`]: super::PropertySubject
//! [`PassthroughSubject`]: super::PassthroughSubject

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

use super::change::ChangeRecord;
use super::observation::Observation;
use super::subject::{Callback, Subject};
use crate::error::{Error, Result};

/// Subscribe-only view of a subject.
pub struct Observable<T> {
    subject: Rc<Subject<T>>,

    /// Current value to replay on subscription (property subjects only).
    replay: Option<Rc<RefCell<T>>>,
}

impl<T> Observable<T> {
    pub(crate) fn new(subject: Rc<Subject<T>>, replay: Option<Rc<RefCell<T>>>) -> Self {
        Self { subject, replay }
    }

    /// Diagnostic label of the underlying subject.
    pub fn label(&self) -> Option<&'static str> {
        self.subject.label()
    }

    /// Number of live subscriptions on the underlying subject.
    pub fn subscriber_count(&self) -> usize {
        self.subject.subscriber_count()
    }

    /// Whether new subscribers receive the current value immediately.
    pub fn replays_current(&self) -> bool {
        self.replay.is_some()
    }

    /// A view that does not keep the producer's subject alive.
    pub fn downgrade(&self) -> WeakObservable<T> {
        WeakObservable {
            label: self.label(),
            subject: Rc::downgrade(&self.subject),
            replay: self.replay.as_ref().map(Rc::downgrade),
        }
    }
}

impl<T: Clone + 'static> Observable<T> {
    /// Register `callback` for change notifications.
    ///
    /// If the view replays, `callback` is invoked with
    /// [`ChangeRecord::initial`] of the current value before this returns.
    /// The subscription lasts until the returned [`Observation`] is dropped
    /// or invalidated.
    pub fn subscribe<F>(&self, callback: F) -> Observation
    where
        F: Fn(&ChangeRecord<T>) + 'static,
    {
        let callback: Callback<T> = Rc::new(callback);

        if let Some(current) = &self.replay {
            let record = ChangeRecord::initial(current.borrow().clone());
            trace!(label = self.label(), "replaying current value");
            callback(&record);
        }

        self.subject.register(callback)
    }

    /// Subscribe to current values only, ignoring the previous value.
    pub fn subscribe_values<F>(&self, callback: F) -> Observation
    where
        F: Fn(&T) + 'static,
    {
        self.subscribe(move |record| callback(record.current()))
    }

    /// Subscribe to current values, skipping records that did not change.
    pub fn subscribe_changes<F>(&self, callback: F) -> Observation
    where
        T: PartialEq,
        F: Fn(&T) + 'static,
    {
        self.subscribe(move |record| {
            if let Some(value) = record.changed_value() {
                callback(value);
            }
        })
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            subject: Rc::clone(&self.subject),
            replay: self.replay.clone(),
        }
    }
}

impl<T> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("label", &self.label())
            .field("replays_current", &self.replays_current())
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

/// Non-owning counterpart of [`Observable`].
pub struct WeakObservable<T> {
    label: Option<&'static str>,
    subject: Weak<Subject<T>>,
    replay: Option<Weak<RefCell<T>>>,
}

impl<T> WeakObservable<T> {
    /// Recover the view, if the producer still owns the subject.
    pub fn upgrade(&self) -> Result<Observable<T>> {
        let released = Error::Released { label: self.label };

        let subject = self.subject.upgrade().ok_or_else(|| released.clone())?;
        let replay = match &self.replay {
            Some(weak) => Some(weak.upgrade().ok_or(released)?),
            None => None,
        };

        Ok(Observable::new(subject, replay))
    }

    /// Whether the producer has dropped the subject.
    pub fn is_released(&self) -> bool {
        self.subject.strong_count() == 0
    }
}

impl<T> Clone for WeakObservable<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            subject: Weak::clone(&self.subject),
            replay: self.replay.clone(),
        }
    }
}

impl<T> fmt::Debug for WeakObservable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakObservable")
            .field("label", &self.label)
            .field("released", &self.is_released())
            .finish()
    }
}
