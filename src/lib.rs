//! Input-field autocomplete
//!
//! As the user types, a caller-supplied [`DataSource`](source::DataSource)
//! is asked for suggestions. They are shown in a menu that can be navigated
//! with the keyboard or the mouse, and the chosen entry is committed back
//! into the input through a caller-supplied function.
//!
//! The core is [`AutocompleteController`](controller::AutocompleteController).
//! It knows nothing about terminals; [`tui`] is one adapter that binds it to
//! a ratatui input field.

pub mod config;
pub mod controller;
pub mod error;
pub mod menu;
pub mod navigator;
pub mod request;
pub mod source;
pub mod suggestion_set;
pub mod tui;


pub use controller::{AutocompleteController, ClickTarget, KeyOutcome, NavKey, View};
pub use error::TypeaheadError;
pub use menu::{DismissRegistry, MenuState};
pub use request::{Request, Responder, StalePolicy};
pub use source::DataSource;
pub use suggestion_set::SuggestionSet;
