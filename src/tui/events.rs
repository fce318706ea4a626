//! Translation of terminal events into controller calls

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app::App;
use super::layout::{Region, region_at};
use crate::controller::{ClickTarget, NavKey};

impl From<KeyCode> for NavKey {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Up => NavKey::Up,
            KeyCode::Down => NavKey::Down,
            KeyCode::Enter => NavKey::Enter,
            KeyCode::Esc => NavKey::Escape,
            _ => NavKey::Other,
        }
    }
}

impl From<Option<Region>> for ClickTarget {
    fn from(region: Option<Region>) -> Self {
        match region {
            Some(Region::InputField) => ClickTarget::Input,
            Some(Region::Menu) => ClickTarget::Menu,
            None => ClickTarget::Outside,
        }
    }
}

impl App {
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    /// Handle key press events
    ///
    /// The controller sees every key first. Keys it leaves alone get the
    /// input field's default behavior: Enter accepts, Esc quits, anything
    /// else edits the text.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.controller.on_key_down(NavKey::from(key.code)).is_handled() {
            if !self.controller.is_open() {
                self.hovered = None;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => {
                self.output = Some(self.input_value());
                self.should_quit = true;
            }
            _ => self.edit_input(key),
        }
    }

    fn edit_input(&mut self, key: KeyEvent) {
        let before = self.input_value();
        self.controller.view_mut().textarea.input(key);
        let after = self.input_value();

        if after != before {
            self.controller.on_input(&after);
            // Items were replaced or removed; the pointer must re-enter one
            self.hovered = None;
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved => self.handle_hover(mouse),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse),
            _ => {}
        }
    }

    /// Emulate enter/leave per menu item from pointer motion
    fn handle_hover(&mut self, mouse: MouseEvent) {
        if !self.controller.is_open() {
            self.hovered = None;
            return;
        }

        let item = self.layout.item_at(mouse.column, mouse.row);
        if item == self.hovered {
            return;
        }

        if self.hovered.is_some() {
            self.controller.on_item_leave();
        }
        if let Some(index) = item {
            self.controller.on_item_hover(index);
        }
        self.hovered = item;
    }

    fn handle_click(&mut self, mouse: MouseEvent) {
        if self.controller.is_open() {
            if let Some(index) = self.layout.item_at(mouse.column, mouse.row) {
                self.controller.on_item_click(index);
                self.hovered = None;
                return;
            }
        }

        // Outside-click dismissal only runs while a listener is attached
        if self.controller.dismiss_registry().is_listening() {
            let region = region_at(&self.layout, mouse.column, mouse.row);
            self.controller.on_outside_click(ClickTarget::from(region));
            if !self.controller.is_open() {
                self.hovered = None;
            }
        }
    }
}
