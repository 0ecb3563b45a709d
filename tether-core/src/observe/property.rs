//! Property Subject
//!
//! A stateful subject. It always holds a current value, and:
//!
//! 1. Every new subscriber immediately receives that value as
//!    [`ChangeRecord::initial`], before `subscribe` returns.
//!
//! 2. Every mutation broadcasts a record pairing the new value with the one
//!    it replaced.
//!
//! The replay on subscription is what lets a view that binds late render the
//! right state straight away, without asking for it separately.
//!
//! # Re-entrancy
//!
//! The stored value is updated before the broadcast starts and is never
//! borrowed while a callback runs, so callbacks may read or set the property.
//! The one exception is the closure passed to [`PropertySubject::update`],
//! which must not set the property it is updating.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::change::ChangeRecord;
use super::observable::Observable;
use super::observation::Observation;
use super::subject::Subject;

/// Stateful subject: the current value is delivered on subscription.
///
/// Returned observations must be retained by the caller. The subject keeps
/// no strong reference to them.
///
/// # Example
///
/// ```rust
/// use tether_core::observe::PropertySubject;
///
/// let name = PropertySubject::new("First".to_string());
///
/// let _observation = name.subscribe(|change| {
///     println!("{:?} -> {}", change.previous(), change.current());
/// });
/// // Prints: "None -> First"
///
/// name.set("Hello".to_string());
/// // Prints: "Some(\"First\") -> Hello"
/// ```
pub struct PropertySubject<T> {
    subject: Rc<Subject<T>>,
    value: Rc<RefCell<T>>,
}

impl<T: Clone + 'static> PropertySubject<T> {
    /// Create a property holding `value`.
    pub fn new(value: T) -> Self {
        Self::with_label(None, value)
    }

    /// Create a property whose log events carry `label`.
    pub fn labelled(label: &'static str, value: T) -> Self {
        Self::with_label(Some(label), value)
    }

    fn with_label(label: Option<&'static str>, value: T) -> Self {
        Self {
            subject: Subject::new(label),
            value: Rc::new(RefCell::new(value)),
        }
    }

    /// A clone of the current value.
    pub fn value(&self) -> T {
        self.value.borrow().clone()
    }

    /// Store `value` and notify every subscriber.
    pub fn set(&self, value: T) {
        let previous = self.value.replace(value.clone());
        self.subject.broadcast(&ChangeRecord::new(value, Some(previous)));
    }

    /// Store `value`, notify every subscriber, and return the old value.
    pub fn replace(&self, value: T) -> T {
        let previous = self.value.replace(value.clone());
        self.subject.broadcast(&ChangeRecord::new(value, Some(previous.clone())));
        previous
    }

    /// Compute a new value from the current one and store it.
    ///
    /// # Panics
    ///
    /// Panics if `f` sets this property, since the current value is borrowed
    /// while `f` runs.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let new_value = {
            let guard = self.value.borrow();
            f(&guard)
        };
        self.set(new_value);
    }

    /// Notify every subscriber with a record whose previous value equals the
    /// current one.
    pub fn notify_unchanged(&self) {
        self.subject.broadcast(&ChangeRecord::unchanged(self.value()));
    }

    /// Register `callback`, delivering the current value to it first.
    pub fn subscribe<F>(&self, callback: F) -> Observation
    where
        F: Fn(&ChangeRecord<T>) + 'static,
    {
        self.observable().subscribe(callback)
    }

    /// Subscribe-only view of this property.
    pub fn observable(&self) -> Observable<T> {
        Observable::new(Rc::clone(&self.subject), Some(Rc::clone(&self.value)))
    }
}

impl<T> PropertySubject<T> {
    /// Borrow the current value.
    pub fn with_value<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subject.subscriber_count()
    }
}

impl<T: Clone + Default + 'static> Default for PropertySubject<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for PropertySubject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertySubject")
            .field("label", &self.subject.label())
            .field("value", &*self.value.borrow())
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}
