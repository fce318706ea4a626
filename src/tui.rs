//! Terminal front end
//!
//! Binds one [`AutocompleteController`](crate::controller::AutocompleteController)
//! to a single-line input field drawn with ratatui. This is the adapter
//! layer: it owns hit-testing and event translation, the controller owns
//! all autocomplete state.

mod app;
mod events;
mod layout;
mod render;
mod view;

pub use app::App;
pub use layout::{LayoutRegions, Region, region_at, scroll_offset};
pub use view::TerminalView;
