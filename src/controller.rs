//! Autocomplete controller bound to one input field
//!
//! Owns the query, the current suggestions, the active index and the menu
//! state, and mutates them only from event callbacks. Platform adapters
//! translate their events into the `on_*` methods and implement [`View`].

mod events;
mod view;

pub use events::{ClickTarget, KeyOutcome, NavKey};
pub use view::View;

use crate::menu::{DismissRegistry, MenuLifecycle, MenuState};
use crate::navigator::SelectionNavigator;
use crate::request::{RequestCoordinator, StalePolicy};
use crate::source::DataSource;
use crate::suggestion_set::SuggestionSet;

/// Turns the selected suggestion into the text placed in the input
pub type CommitFn<T> = Box<dyn FnMut(&T) -> String>;

pub struct AutocompleteController<T, V> {
    view: V,
    source: Box<dyn DataSource<T>>,
    commit: CommitFn<T>,
    requests: RequestCoordinator<T>,
    /// Live value of the input field
    query: String,
    suggestions: Option<SuggestionSet<T>>,
    navigator: SelectionNavigator,
    menu: MenuLifecycle,
}

impl<T, V: View<T>> AutocompleteController<T, V> {
    pub fn new<S, C>(view: V, source: S, commit: C) -> Self
    where
        S: DataSource<T> + 'static,
        C: FnMut(&T) -> String + 'static,
    {
        Self {
            view,
            source: Box::new(source),
            commit: Box::new(commit),
            requests: RequestCoordinator::new(StalePolicy::default()),
            query: String::new(),
            suggestions: None,
            navigator: SelectionNavigator::new(),
            menu: MenuLifecycle::new(DismissRegistry::new()),
        }
    }

    pub fn with_stale_policy(mut self, policy: StalePolicy) -> Self {
        self.requests.set_policy(policy);
        self
    }

    /// Share an outside-click registry with the host and other widgets
    pub fn with_dismiss_registry(mut self, registry: DismissRegistry) -> Self {
        self.menu.close();
        self.menu = MenuLifecycle::new(registry);
        self
    }

    // Input field events

    /// The input's value changed to `raw`
    ///
    /// An empty value closes the menu without fetching. Anything else issues
    /// exactly one fetch; a source that responds synchronously is applied
    /// before this returns.
    pub fn on_input(&mut self, raw: &str) {
        self.query = raw.to_string();

        if raw.is_empty() {
            self.requests.invalidate();
            self.close();
            return;
        }

        self.requests.issue(raw, self.source.as_mut());
        self.poll_completions();
    }

    /// Handle a key press in the input field
    pub fn on_key_down(&mut self, key: NavKey) -> KeyOutcome {
        if !self.menu.is_open() {
            return KeyOutcome::Passthrough;
        }

        let count = self.suggestion_count();
        match key {
            NavKey::Up => {
                self.navigator.up(count);
                self.view.highlight(self.navigator.active());
                KeyOutcome::Suppressed
            }
            NavKey::Down => {
                self.navigator.down(count);
                self.view.highlight(self.navigator.active());
                KeyOutcome::Suppressed
            }
            NavKey::Enter => {
                self.select();
                KeyOutcome::Suppressed
            }
            NavKey::Escape => {
                self.close();
                KeyOutcome::Consumed
            }
            NavKey::Other => KeyOutcome::Passthrough,
        }
    }

    // Menu item events

    /// Pointer entered the item at `index`
    pub fn on_item_hover(&mut self, index: usize) {
        if !self.menu.is_open() {
            return;
        }
        let count = self.suggestion_count();
        self.navigator.set(index, count);
        self.view.highlight(self.navigator.active());
    }

    /// Pointer left the active item
    pub fn on_item_leave(&mut self) {
        if !self.menu.is_open() {
            return;
        }
        self.navigator.reset();
        self.view.highlight(None);
    }

    pub fn on_item_click(&mut self, index: usize) {
        if !self.menu.is_open() {
            return;
        }
        let count = self.suggestion_count();
        self.navigator.set(index, count);
        self.view.highlight(self.navigator.active());
        self.select();
    }

    /// A click arrived through the outside-click listener
    ///
    /// Ignored unless this controller currently holds the listener.
    pub fn on_outside_click(&mut self, target: ClickTarget) {
        if !self.menu.is_listening() {
            return;
        }
        if target == ClickTarget::Outside {
            self.close();
        }
    }

    // Commit and close

    /// Commit the active suggestion; no-op when nothing is active
    pub fn select(&mut self) {
        let Some(index) = self.navigator.active() else {
            return;
        };
        let Some(item) = self.suggestions.as_ref().and_then(|set| set.get(index)) else {
            return;
        };

        let value = (self.commit)(item);
        self.view.set_input_value(&value);
        self.query = value;
        // The input changed without a fetch; in-flight results describe the old text
        self.requests.invalidate();
        self.close();
    }

    /// Close the menu, dropping the suggestions and the active index
    pub fn close(&mut self) {
        let was_open = self.menu.close();
        self.suggestions = None;
        self.navigator.reset();
        if was_open {
            self.view.clear();
        }
    }

    // Request completion

    /// Apply any fetch that finished since the last call
    ///
    /// Hosts with asynchronous sources call this from their event loop.
    /// Returns `true` if the widget state changed.
    pub fn poll_completions(&mut self) -> bool {
        match self.requests.poll(&self.query) {
            Some(set) => {
                self.apply(set);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, set: SuggestionSet<T>) {
        if set.is_empty() {
            self.close();
            return;
        }

        self.navigator.reset();
        self.view.render(&set);
        self.view.highlight(None);
        self.suggestions = Some(set);
        self.menu.open();
    }

    fn suggestion_count(&self) -> usize {
        self.suggestions.as_ref().map_or(0, SuggestionSet::len)
    }

    // Accessors

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> Option<&SuggestionSet<T>> {
        self.suggestions.as_ref()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.navigator.active()
    }

    pub fn active_item(&self) -> Option<&T> {
        let index = self.navigator.active()?;
        self.suggestions.as_ref()?.get(index)
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    pub fn is_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Whether the outside-click listener is attached
    pub fn is_listening(&self) -> bool {
        self.menu.is_listening()
    }

    pub fn dismiss_registry(&self) -> &DismissRegistry {
        self.menu.registry()
    }

    pub fn stale_policy(&self) -> StalePolicy {
        self.requests.policy()
    }

    pub fn pending_requests(&self) -> usize {
        self.requests.pending_count()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
