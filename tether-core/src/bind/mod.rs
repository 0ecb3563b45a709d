//! State Binding
//!
//! Glue between producers and consumers of view state:
//!
//! - [`StateProviding`] and [`Lifecycle`] describe the producer (presenter)
//!   side: published state plus visibility hooks.
//! - [`StateRepresentable`] describes the consumer (view) side and provides
//!   [`StateRepresentable::bind`], which drives the consumer from a subject.

mod presenter;
mod representable;

pub use presenter::{Lifecycle, StateProviding};
pub use representable::StateRepresentable;
