//! Change Records
//!
//! Every notification delivered by a subject is a [`ChangeRecord`]: the value
//! that is current after the mutation, paired with the value it replaced (if
//! one existed).
//!
//! Records are built once per broadcast and lent to each callback by
//! reference. Nothing in the framework retains them after delivery.

/// The current/previous value pair describing one notification.
///
/// `previous` is `None` only for the replay a [`PropertySubject`] sends to a
/// new subscriber, or for the first send on a [`PassthroughSubject`].
///
/// [`PropertySubject`]: super::PropertySubject
/// [`PassthroughSubject`]: super::PassthroughSubject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChangeRecord<T> {
    current: T,
    previous: Option<T>,
}

impl<T> ChangeRecord<T> {
    /// Create a record from a current value and the value it replaced.
    pub fn new(current: T, previous: Option<T>) -> Self {
        Self { current, previous }
    }

    /// A record with no previous value.
    ///
    /// Used for the replay a stateful subject sends on subscription.
    pub fn initial(value: T) -> Self {
        Self::new(value, None)
    }

    /// The value after the change.
    pub fn current(&self) -> &T {
        &self.current
    }

    /// The value before the change, if there was one.
    pub fn previous(&self) -> Option<&T> {
        self.previous.as_ref()
    }

    /// Consume the record, keeping only the current value.
    pub fn into_current(self) -> T {
        self.current
    }

    /// Consume the record into its `(current, previous)` parts.
    pub fn into_parts(self) -> (T, Option<T>) {
        (self.current, self.previous)
    }
}

impl<T: Clone> ChangeRecord<T> {
    /// A synthetic record whose previous value equals the current one.
    pub fn unchanged(value: T) -> Self {
        Self::new(value.clone(), Some(value))
    }
}

impl<T: PartialEq> ChangeRecord<T> {
    /// Whether the current value differs from the previous one.
    ///
    /// A record with no previous value always counts as changed.
    pub fn is_changed(&self) -> bool {
        self.previous.as_ref() != Some(&self.current)
    }

    /// The current value if it changed, otherwise `None`.
    pub fn changed_value(&self) -> Option<&T> {
        if self.is_changed() {
            Some(&self.current)
        } else {
            None
        }
    }
}
