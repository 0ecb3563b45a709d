//! Tether Core
//!
//! This crate provides the state-propagation primitives that connect a
//! presenter (the producer of view state) to a view (its consumer) without
//! either side holding the other's subscription.
//! It implements:
//!
//! - Observation subjects (stateful properties and stateless passthroughs)
//! - Change records carrying previous/current value pairs
//! - Lifetime-bound observation handles that unsubscribe on drop
//! - State binding for views that render a single state type
//!
//! # Architecture
//!
//! The crate is organized into two modules:
//!
//! - `observe`: Subjects, observable views, change records and handles
//! - `bind`: Producer/consumer traits and the view binder
//!
//! Everything is single-threaded: subjects are mutated and notify their
//! subscribers synchronously on the thread that owns them.
//!
//! # Example
//!
//! ```rust
//! use tether_core::observe::{PassthroughSubject, PropertySubject};
//!
//! // A property replays its current value to every new subscriber
//! let name = PropertySubject::new("First");
//! let observation = name.subscribe(|change| {
//!     println!("Name changed from {:?} to {}", change.previous(), change.current());
//! });
//! // Prints: "Name changed from None to First"
//!
//! name.set("Hello");
//! // Prints: "Name changed from Some("First") to Hello"
//!
//! // Dropping the handle ends the subscription
//! drop(observation);
//! name.set("There");
//! // Prints nothing
//!
//! // A passthrough only forwards values sent after subscription
//! let taps = PassthroughSubject::new();
//! taps.send(1);
//! let _taps = taps.subscribe(|change| assert_eq!(change.previous(), Some(&1)));
//! taps.send(2);
//! ```

pub mod bind;
pub mod error;
pub mod observe;

pub use error::{Error, Result};
