//! Error types.
//!
//! Subscribing, sending, setting and invalidating are total operations. The
//! only fallible boundary is resolving a [`WeakObservable`] whose producer has
//! already gone away.
//!
//! [`WeakObservable`]: crate::observe::WeakObservable

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The subject behind a weak observable view has been dropped.
    #[error("observable `{}` was released by its producer", label.unwrap_or("<unnamed>"))]
    Released {
        /// Label of the released subject, if it had one.
        label: Option<&'static str>,
    },
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
