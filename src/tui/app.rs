//! Application state for the terminal front end

use crate::config::{Config, MenuConfig};
use crate::controller::AutocompleteController;
use crate::source::DataSource;

use super::layout::LayoutRegions;
use super::view::TerminalView;

pub type TerminalController = AutocompleteController<String, TerminalView>;

/// Application state
pub struct App {
    pub controller: TerminalController,
    pub menu_config: MenuConfig,
    /// Regions recorded by the last render, for mouse hit-testing
    pub layout: LayoutRegions,
    /// Menu item currently under the mouse pointer
    pub(super) hovered: Option<usize>,
    pub should_quit: bool,
    /// Value accepted with Enter, printed on exit
    pub output: Option<String>,
}

impl App {
    /// Create a new App reading suggestions from `source`
    pub fn new<S>(config: &Config, source: S) -> Self
    where
        S: DataSource<String> + 'static,
    {
        let controller =
            AutocompleteController::new(TerminalView::new(), source, |word: &String| word.clone())
                .with_stale_policy(config.request.stale_policy);

        Self {
            controller,
            menu_config: config.menu.clone(),
            layout: LayoutRegions::default(),
            hovered: None,
            should_quit: false,
            output: None,
        }
    }

    pub fn input_value(&self) -> String {
        self.controller.view().input_value()
    }

    /// Apply completions from asynchronous sources
    ///
    /// Called once per loop iteration; returns `true` if a redraw is due.
    pub fn tick(&mut self) -> bool {
        let changed = self.controller.poll_completions();
        if changed {
            self.hovered = None;
        }
        changed
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
