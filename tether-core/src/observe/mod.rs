//! Observation Subjects
//!
//! This module implements the subject/observation machinery that connects a
//! state producer (a presenter) to a state consumer (a view) without either
//! side owning the other's subscription.
//!
//! # Concepts
//!
//! ## Subjects
//!
//! A subject holds zero or more callbacks and delivers a [`ChangeRecord`] to
//! each of them whenever it changes. There are two flavours:
//!
//! - [`PropertySubject`] holds real state and replays it to every new
//!   subscriber.
//! - [`PassthroughSubject`] forwards values as they are sent and replays
//!   nothing.
//!
//! Both share the registry/broadcast core in [`Subject`], which cannot be
//! constructed on its own.
//!
//! ## Observations
//!
//! Every `subscribe` call returns an [`Observation`]. The subscription lives
//! exactly as long as that handle: drop it (or call
//! [`Observation::invalidate`]) and the callback is gone.
//!
//! Handles point back at their subject weakly, so an outstanding handle never
//! keeps a subject alive.
//!
//! # Threading
//!
//! Everything here is single-threaded (`Rc`/`RefCell`, no locking). Deferred
//! work must be scheduled back onto the thread that owns the subject.

mod change;
mod observable;
mod observation;
mod passthrough;
mod property;
mod subject;

pub use change::ChangeRecord;
pub use observable::{Observable, WeakObservable};
pub use observation::{Observation, ObservationId, Observations};
pub use passthrough::PassthroughSubject;
pub use property::PropertySubject;
pub use subject::Subject;
