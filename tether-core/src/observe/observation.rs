//! Observation Handles
//!
//! Subscribing to a subject returns an [`Observation`]. The handle is the
//! only thing that keeps a subscription alive: dropping it (or calling
//! [`Observation::invalidate`]) removes the callback from the subject.
//!
//! # Ownership
//!
//! The handle holds a `Weak` reference back to its subject, and the subject
//! holds nothing that refers to the handle. Either side may go away first:
//!
//! - Subject dropped first: the handle's weak reference fails to upgrade and
//!   invalidation becomes a no-op.
//! - Handle dropped first: the subject forgets the callback.

use std::fmt;
use std::rc::Weak;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for one subscription.
///
/// Used as the key of the subject's callback registry. Identifiers are never
/// reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObservationId(u64);

impl ObservationId {
    /// Generate a new unique observation ID.
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ObservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obs#{}", self.0)
    }
}

/// Implemented by subjects so a handle can remove its registration without
/// knowing the subject's value type.
pub(crate) trait Detach {
    fn detach(&self, id: ObservationId);
}

/// Handle to a live subscription.
///
/// Dropping this handle unsubscribes the callback it was returned for.
#[must_use = "dropping an Observation immediately ends the subscription"]
pub struct Observation {
    id: ObservationId,

    /// Back-reference to the subject. `None` once invalidated.
    subject: Option<Weak<dyn Detach>>,
}

impl Observation {
    pub(crate) fn new(id: ObservationId, subject: Weak<dyn Detach>) -> Self {
        Self {
            id,
            subject: Some(subject),
        }
    }

    /// The identifier this subscription is registered under.
    pub fn id(&self) -> ObservationId {
        self.id
    }

    /// Whether the subscription can still receive notifications.
    ///
    /// False after invalidation, or once the subject has been dropped.
    pub fn is_active(&self) -> bool {
        self.subject
            .as_ref()
            .is_some_and(|subject| subject.strong_count() > 0)
    }

    /// End the subscription.
    ///
    /// Idempotent: only the first call touches the subject, and a subject
    /// that no longer exists is ignored.
    pub fn invalidate(&mut self) {
        if let Some(subject) = self.subject.take().and_then(|weak| weak.upgrade()) {
            subject.detach(self.id);
        }
    }

    /// Move this handle into `bag`, tying its lifetime to the bag's.
    pub fn store_in(self, bag: &mut Observations) {
        bag.insert(self);
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.invalidate();
    }
}

impl fmt::Debug for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observation")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

/// A collection of observations that share one lifetime.
///
/// Consumers that bind to several subjects keep the handles here; dropping
/// or clearing the bag ends every subscription it holds.
#[derive(Debug, Default)]
pub struct Observations {
    handles: Vec<Observation>,
}

impl Observations {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a handle.
    pub fn insert(&mut self, observation: Observation) {
        self.handles.push(observation);
    }

    /// Number of handles held.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether the bag holds no handles.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Invalidate and release every handle.
    pub fn clear(&mut self) {
        for mut observation in std::mem::take(&mut self.handles) {
            observation.invalidate();
        }
    }
}

impl Extend<Observation> for Observations {
    fn extend<I: IntoIterator<Item = Observation>>(&mut self, iter: I) {
        self.handles.extend(iter);
    }
}
