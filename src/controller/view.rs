//! Host-side surface the controller drives

use crate::suggestion_set::SuggestionSet;

/// Rendering and input-field access supplied by the platform adapter
///
/// `render` draws one item per suggestion; the host's hit-testing must map
/// item positions back to the same indices.
pub trait View<T> {
    /// Replace the menu contents with `suggestions`
    fn render(&mut self, suggestions: &SuggestionSet<T>);

    /// Mark the item at `active` and unmark every other one
    fn highlight(&mut self, active: Option<usize>);

    /// Remove all menu contents
    fn clear(&mut self);

    /// Write the committed value into the input field
    fn set_input_value(&mut self, value: &str);
}
