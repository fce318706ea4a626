//! Terminal implementation of the controller's view

use std::fmt::Display;

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

use crate::controller::View;
use crate::suggestion_set::SuggestionSet;

/// Input field plus the menu lines last rendered by the controller
pub struct TerminalView {
    pub textarea: TextArea<'static>,
    items: Vec<String>,
    active: Option<usize>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            textarea: input_textarea(""),
            items: Vec::new(),
            active: None,
        }
    }

    /// Current text of the input field
    pub fn input_value(&self) -> String {
        self.textarea.lines().first().cloned().unwrap_or_default()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> View<T> for TerminalView {
    fn render(&mut self, suggestions: &SuggestionSet<T>) {
        self.items = suggestions.iter().map(ToString::to_string).collect();
    }

    fn highlight(&mut self, active: Option<usize>) {
        self.active = active;
    }

    fn clear(&mut self) {
        self.items.clear();
        self.active = None;
    }

    fn set_input_value(&mut self, value: &str) {
        self.textarea = input_textarea(value);
    }
}

/// Single-line text area with the cursor after `value`
fn input_textarea(value: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![value.to_string()]);

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea.move_cursor(CursorMove::End);
    textarea
}
