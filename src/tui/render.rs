//! Rendering of the input field and the suggestion menu

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::app::App;
use super::layout::{LayoutRegions, scroll_offset};
use crate::config::Placement;
use crate::navigator::highlight_marks;

const INPUT_HEIGHT: u16 = 3;
const MENU_BORDER: u16 = 2;
const MIN_MENU_WIDTH: u16 = 20;
const MENU_OFFSET_X: u16 = 1;
const HINT: &str = " ↑/↓ navigate · Enter select · Esc close/quit · Ctrl+C exit ";

impl App {
    /// Render the UI and record component regions for mouse hit-testing
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let input_area = input_area(area, self.menu_config.placement);

        frame.render_widget(&self.controller.view().textarea, input_area);
        render_hint(frame, area);

        self.layout = LayoutRegions {
            input: Some(input_area),
            ..LayoutRegions::default()
        };

        if self.controller.is_open() {
            self.render_menu(frame, area, input_area);
        }
    }

    fn render_menu(&mut self, frame: &mut Frame, area: Rect, input_area: Rect) {
        let view = self.controller.view();
        let items = view.items();
        if items.is_empty() {
            return;
        }

        let marker = self.menu_config.active_marker.as_str();
        let marker_width = marker.width();
        let available_rows = match self.menu_config.placement {
            Placement::Below => area.bottom().saturating_sub(input_area.bottom()),
            Placement::Above => input_area.y.saturating_sub(area.y),
        }
        .saturating_sub(MENU_BORDER);

        let visible = items
            .len()
            .min(self.menu_config.max_visible.max(1))
            .min(usize::from(available_rows));
        if visible == 0 {
            return;
        }

        let offset = scroll_offset(view.active(), items.len(), visible);

        let text_width = items.iter().map(|item| item.width()).max().unwrap_or(0);
        let menu_width = u16::try_from(text_width + marker_width)
            .unwrap_or(u16::MAX)
            .saturating_add(MENU_BORDER)
            .max(MIN_MENU_WIDTH)
            .min(input_area.width.saturating_sub(MENU_OFFSET_X));
        let menu_height = visible as u16 + MENU_BORDER;

        let menu_area = match self.menu_config.placement {
            Placement::Below => Rect {
                x: input_area.x + MENU_OFFSET_X,
                y: input_area.bottom(),
                width: menu_width,
                height: menu_height,
            },
            Placement::Above => Rect {
                x: input_area.x + MENU_OFFSET_X,
                y: input_area.y.saturating_sub(menu_height),
                width: menu_width,
                height: menu_height,
            },
        };

        let active_style = Style::default()
            .fg(self.menu_config.active_fg_color())
            .bg(self.menu_config.active_bg_color())
            .add_modifier(Modifier::BOLD);
        let padding = " ".repeat(marker_width);

        let list_items: Vec<ListItem> = items
            .iter()
            .zip(highlight_marks(view.active(), items.len()))
            .skip(offset)
            .take(visible)
            .map(|(item, is_active)| {
                let line = if is_active {
                    Line::from(Span::styled(format!("{}{}", marker, item), active_style))
                } else {
                    Line::from(Span::styled(
                        format!("{}{}", padding, item),
                        Style::default().fg(Color::White),
                    ))
                };
                ListItem::new(line)
            })
            .collect();

        // Clear the background area to prevent transparency
        frame.render_widget(Clear, menu_area);

        let title = format!(" {}/{} ", view.active().map_or(0, |i| i + 1), items.len());
        let list = List::new(list_items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(list, menu_area);

        self.layout.menu = Some(menu_area);
        self.layout.menu_offset = offset;
        self.layout.menu_rows = visible;
    }
}

/// Input box at the top, or at the bottom when the menu opens above it
fn input_area(area: Rect, placement: Placement) -> Rect {
    let height = INPUT_HEIGHT.min(area.height);
    let y = match placement {
        Placement::Below => area.y,
        Placement::Above => area.bottom().saturating_sub(height + 1),
    };

    Rect {
        x: area.x,
        y,
        width: area.width,
        height,
    }
}

/// Key hint on the bottom line
fn render_hint(frame: &mut Frame, area: Rect) {
    if area.height <= INPUT_HEIGHT {
        return;
    }

    let y = area.bottom() - 1;
    let hint = Paragraph::new(Line::from(Span::styled(
        HINT,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hint, Rect::new(area.x, y, area.width, 1));
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
