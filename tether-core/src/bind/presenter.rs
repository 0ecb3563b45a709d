//! Producer Capabilities
//!
//! A presenter exposes its view state as a read-only [`Observable`] and
//! reacts to the visibility of the view it drives. The two concerns are
//! separate traits so a producer can implement only what it needs; action
//! methods (button presses and the like) are specific to each feature and
//! live on the feature's own trait.

use crate::observe::Observable;

/// A producer of view state.
pub trait StateProviding {
    /// The state the producer publishes.
    type State: Clone + 'static;

    /// Subscribe-only access to the published state.
    fn state(&self) -> Observable<Self::State>;
}

/// Visibility hooks called by the view layer.
///
/// Both hooks do nothing unless overridden.
pub trait Lifecycle {
    /// The driven view became visible.
    fn resume(&self) {}

    /// The driven view is no longer visible.
    fn suspend(&self) {}
}
