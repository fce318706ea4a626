//! Region tracking for position-aware mouse interactions
//!
//! Rendering records where the input and the menu were drawn; mouse events
//! are resolved against the last recorded frame.

use ratatui::layout::{Position, Rect};

/// UI component under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    Menu,
}

/// Areas recorded during the last render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input: Option<Rect>,
    pub menu: Option<Rect>,
    /// Index of the first item shown in the menu
    pub menu_offset: usize,
    /// Number of items shown in the menu
    pub menu_rows: usize,
}

impl LayoutRegions {
    /// Suggestion index of the menu row at the given position
    ///
    /// Only item rows count; the menu border is part of the menu region
    /// but maps to no item.
    pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        let menu = self.menu?;
        let inner = Rect {
            x: menu.x.saturating_add(1),
            y: menu.y.saturating_add(1),
            width: menu.width.saturating_sub(2),
            height: menu.height.saturating_sub(2),
        };
        if !inner.contains(Position::new(column, row)) {
            return None;
        }

        let relative = usize::from(row - inner.y);
        (relative < self.menu_rows).then_some(self.menu_offset + relative)
    }
}

/// Which component contains the position, menu first since it may overlap
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    let position = Position::new(column, row);

    if regions.menu.is_some_and(|rect| rect.contains(position)) {
        return Some(Region::Menu);
    }
    if regions.input.is_some_and(|rect| rect.contains(position)) {
        return Some(Region::InputField);
    }
    None
}

/// First visible item so that `active` stays inside a window of `visible` rows
pub fn scroll_offset(active: Option<usize>, len: usize, visible: usize) -> usize {
    if visible == 0 || len <= visible {
        return 0;
    }

    match active {
        Some(index) if index >= visible => (index + 1 - visible).min(len - visible),
        _ => 0,
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
