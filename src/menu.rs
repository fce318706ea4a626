//! Open/closed lifecycle of the suggestion menu
//!
//! The menu owns the outside-click listener for as long as it is open. The
//! listener is a guard handed out by a [`DismissRegistry`] and released by
//! dropping it, so every path that closes the menu also detaches it.

mod dismiss;
mod lifecycle;

pub use dismiss::{DismissGuard, DismissRegistry, ListenerId};
pub use lifecycle::{MenuLifecycle, MenuState};
