//! Subject Core
//!
//! [`Subject`] is the registration/notification machinery shared by both
//! subject flavours. It owns a map from [`ObservationId`] to callback and
//! delivers [`ChangeRecord`]s to every registered callback.
//!
//! It has no public constructor and no public mutation API:
//! values only flow into a subject through [`PassthroughSubject`] or
//! [`PropertySubject`], which decide what (if anything) a new subscriber is
//! sent on registration.
//!
//! # Delivery
//!
//! Broadcasts are synchronous and run on the calling thread. The callback set
//! is snapshotted before delivery and no internal borrow is held while a
//! callback runs, so callbacks may:
//!
//! - invalidate their own handle or a sibling's (an invalidated callback is
//!   skipped for the rest of the in-flight record),
//! - subscribe new callbacks (they first hear about the next record),
//! - mutate the subject again. The nested broadcast reaches every receiver,
//!   and the outer one then stops, so no receiver sees an older record after
//!   a newer one.
//!
//! [`PassthroughSubject`]: super::PassthroughSubject
//! [`PropertySubject`]: super::PropertySubject

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::change::ChangeRecord;
use super::observation::{Detach, Observation, ObservationId};

/// A registered notification callback.
pub(crate) type Callback<T> = Rc<dyn Fn(&ChangeRecord<T>)>;

/// Callback registry and broadcaster shared by every subject flavour.
pub struct Subject<T> {
    /// Diagnostic name attached to log events.
    label: Option<&'static str>,

    /// Live subscriptions, in registration order.
    observers: RefCell<IndexMap<ObservationId, Callback<T>>>,

    /// Incremented by every broadcast.
    generation: Cell<u64>,
}

impl<T: 'static> Subject<T> {
    pub(crate) fn new(label: Option<&'static str>) -> Rc<Self> {
        Rc::new(Self {
            label,
            observers: RefCell::new(IndexMap::new()),
            generation: Cell::new(0),
        })
    }

    /// Register a callback and return the handle that owns the registration.
    pub(crate) fn register(self: &Rc<Self>, callback: Callback<T>) -> Observation {
        let id = ObservationId::next();
        let count = {
            let mut observers = self.observers.borrow_mut();
            observers.insert(id, callback);
            observers.len()
        };
        debug!(label = self.label, %id, subscribers = count, "subscribed");

        let subject = Rc::downgrade(self);
        let subject: Weak<dyn Detach> = subject;
        Observation::new(id, subject)
    }

    /// Deliver `record` to every currently registered callback.
    ///
    /// If a callback triggers a newer broadcast, this one stops: every
    /// receiver it had not reached yet has already been given the newer
    /// record.
    pub(crate) fn broadcast(&self, record: &ChangeRecord<T>) {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);

        let receivers: SmallVec<[(ObservationId, Callback<T>); 4]> = self
            .observers
            .borrow()
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect();
        trace!(label = self.label, receivers = receivers.len(), "broadcast");

        for (id, callback) in receivers {
            if self.generation.get() != generation {
                trace!(label = self.label, "superseded by a nested broadcast");
                return;
            }
            // Skip callbacks whose handle was invalidated by an earlier
            // receiver of this same record.
            if !self.observers.borrow().contains_key(&id) {
                continue;
            }
            callback(record);
        }
    }
}

impl<T> Subject<T> {
    /// Diagnostic label given at construction, if any.
    pub fn label(&self) -> Option<&'static str> {
        self.label
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.observers.borrow().len()
    }
}

impl<T> Detach for Subject<T> {
    fn detach(&self, id: ObservationId) {
        // Release the registry borrow before the removed callback is dropped.
        let removed = self.observers.borrow_mut().shift_remove(&id);
        if removed.is_some() {
            debug!(
                label = self.label,
                %id,
                subscribers = self.subscriber_count(),
                "unsubscribed"
            );
        }
    }
}

impl<T> fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("label", &self.label)
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}
