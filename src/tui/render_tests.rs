//! Tests for terminal rendering

use ratatui::crossterm::event::KeyCode;

use crate::config::Config;
use crate::test_utils::test_helpers::{key, render_app, test_app, test_app_with_config, type_text};

#[test]
fn test_closed_menu_renders_only_input() {
    let mut app = test_app();
    let output = render_app(&mut app, 40, 10);

    assert!(output.contains("Search"));
    assert!(!output.contains("apple"));
    assert!(app.layout.menu.is_none());
}

#[test]
fn test_open_menu_lists_items() {
    let mut app = test_app();
    type_text(&mut app, "a");
    let output = render_app(&mut app, 40, 10);

    assert!(output.contains("apple"));
    assert!(output.contains("avocado"));
    assert!(output.contains("0/2"));
    assert!(!output.contains("► "));
}

#[test]
fn test_active_item_gets_marker() {
    let mut app = test_app();
    type_text(&mut app, "a");
    app.handle_key_event(key(KeyCode::Down));
    let output = render_app(&mut app, 40, 10);

    assert!(output.contains("► apple"));
    assert!(!output.contains("► avocado"));
    assert!(output.contains("1/2"));
}

#[test]
fn test_custom_marker_from_config() {
    let mut config = Config::default();
    config.menu.active_marker = "> ".to_string();
    let mut app = test_app_with_config(&config);
    type_text(&mut app, "c");
    app.handle_key_event(key(KeyCode::Up));
    let output = render_app(&mut app, 40, 10);

    assert!(output.contains("> cherry"));
}

#[test]
fn test_menu_scrolls_to_keep_active_visible() {
    let mut config = Config::default();
    config.menu.max_visible = 2;
    let mut app = test_app_with_config(&config);
    type_text(&mut app, "b");
    app.handle_key_event(key(KeyCode::Up));
    let output = render_app(&mut app, 40, 12);

    assert_eq!(app.layout.menu_offset, 1);
    assert_eq!(app.layout.menu_rows, 2);
    assert!(output.contains("► blueberry"));
    assert!(!output.contains("banana"));
}

#[test]
fn test_tiny_terminal_does_not_draw_menu() {
    let mut app = test_app();
    type_text(&mut app, "a");
    render_app(&mut app, 20, 3);

    assert!(app.layout.menu.is_none());
    assert!(app.controller.is_open());
}
