//! State Representation
//!
//! [`StateRepresentable`] is implemented by consumers (views) that render a
//! single state type. Binding couples the consumer's
//! [`apply_state`](StateRepresentable::apply_state) to an [`Observable`] of
//! that state.
//!
//! # Delivery rules
//!
//! - Only records that actually changed are applied. Subjects do not require
//!   `PartialEq`, so duplicates are filtered here.
//! - The binding holds the consumer weakly. If the consumer has been dropped,
//!   notifications are discarded.
//! - The binding ends when the returned [`Observation`] is dropped.

use std::rc::Rc;

use tracing::debug;

use crate::error::Result;
use crate::observe::{Observable, Observation, WeakObservable};

/// A consumer that renders one state type.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use tether_core::bind::StateRepresentable;
/// use tether_core::observe::PropertySubject;
///
/// struct Button {
///     enabled: Cell<bool>,
/// }
///
/// impl StateRepresentable for Button {
///     type State = bool;
///
///     fn apply_state(&self, state: &bool, _animated: bool) {
///         self.enabled.set(*state);
///     }
/// }
///
/// let enabled = PropertySubject::new(false);
/// let button = Rc::new(Button { enabled: Cell::new(true) });
///
/// let _binding = button.bind(&enabled.observable(), false);
/// assert!(!button.enabled.get());
///
/// enabled.set(true);
/// assert!(button.enabled.get());
/// ```
pub trait StateRepresentable: 'static {
    /// The state this consumer renders.
    type State: Clone + PartialEq + 'static;

    /// Render `state`, animating the transition if `animated` is set.
    fn apply_state(&self, state: &Self::State, animated: bool);

    /// Render `state` without animation.
    fn set_state(&self, state: &Self::State) {
        self.apply_state(state, false);
    }

    /// Apply every changed state delivered by `source`.
    ///
    /// If `source` replays, the current state is applied before this returns.
    /// Keep the returned handle for as long as the binding should last.
    fn bind(self: &Rc<Self>, source: &Observable<Self::State>, animated: bool) -> Observation {
        let consumer = Rc::downgrade(self);
        let label = source.label();

        source.subscribe(move |record| {
            let Some(state) = record.changed_value() else {
                debug!(label = label, "state unchanged; not applied");
                return;
            };
            match consumer.upgrade() {
                Some(consumer) => consumer.apply_state(state, animated),
                None => debug!(label = label, "consumer released; state dropped"),
            }
        })
    }

    /// Like [`bind`](Self::bind), for a producer that may already be gone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Released`](crate::Error::Released) if the producer has
    /// dropped the subject.
    fn bind_weak(
        self: &Rc<Self>,
        source: &WeakObservable<Self::State>,
        animated: bool,
    ) -> Result<Observation> {
        Ok(self.bind(&source.upgrade()?, animated))
    }
}
