// Configuration type definitions

use std::str::FromStr;

use ratatui::style::Color;
use serde::Deserialize;

use crate::request::StalePolicy;
use crate::source::DEFAULT_MAX_RESULTS;

pub const DEFAULT_MAX_VISIBLE: usize = 8;
pub const DEFAULT_ACTIVE_MARKER: &str = "► ";
pub const DEFAULT_ACTIVE_FG: Color = Color::Black;
pub const DEFAULT_ACTIVE_BG: Color = Color::Cyan;

/// Where the menu is mounted relative to the input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    #[default]
    Below,
    Above,
}

/// Menu appearance section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub placement: Placement,
    pub max_visible: usize,
    /// Prefix drawn in front of the active item
    pub active_marker: String,
    pub active_fg: String,
    pub active_bg: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            placement: Placement::Below,
            max_visible: DEFAULT_MAX_VISIBLE,
            active_marker: DEFAULT_ACTIVE_MARKER.to_string(),
            active_fg: "black".to_string(),
            active_bg: "cyan".to_string(),
        }
    }
}

impl MenuConfig {
    /// Foreground of the active row; unknown color names fall back
    pub fn active_fg_color(&self) -> Color {
        parse_color(&self.active_fg, DEFAULT_ACTIVE_FG)
    }

    pub fn active_bg_color(&self) -> Color {
        parse_color(&self.active_bg, DEFAULT_ACTIVE_BG)
    }
}

fn parse_color(name: &str, fallback: Color) -> Color {
    Color::from_str(name).unwrap_or_else(|_| {
        log::warn!("Unknown color {:?} in config, using {}", name, fallback);
        fallback
    })
}

/// Request handling section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    pub stale_policy: StalePolicy,
    /// Simulated data-source latency in milliseconds
    pub delay_ms: u64,
    pub max_results: usize,
}

impl Default for RequestConfig {
    fn default() -> Self {
        RequestConfig {
            stale_policy: StalePolicy::Accept,
            delay_ms: 0,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub request: RequestConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.menu.placement, Placement::Below);
        assert_eq!(config.menu.max_visible, DEFAULT_MAX_VISIBLE);
        assert_eq!(config.menu.active_marker, DEFAULT_ACTIVE_MARKER);
        assert_eq!(config.request.stale_policy, StalePolicy::Accept);
        assert_eq!(config.request.delay_ms, 0);
        assert_eq!(config.request.max_results, DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn test_full_config_parses() {
        let config: Config = toml::from_str(
            r#"
[menu]
placement = "above"
max_visible = 4
active_marker = "> "
active_fg = "white"
active_bg = "blue"

[request]
stale_policy = "latest"
delay_ms = 150
max_results = 10
"#,
        )
        .unwrap();

        assert_eq!(config.menu.placement, Placement::Above);
        assert_eq!(config.menu.max_visible, 4);
        assert_eq!(config.menu.active_marker, "> ");
        assert_eq!(config.menu.active_fg_color(), Color::White);
        assert_eq!(config.menu.active_bg_color(), Color::Blue);
        assert_eq!(config.request.stale_policy, StalePolicy::Latest);
        assert_eq!(config.request.delay_ms, 150);
        assert_eq!(config.request.max_results, 10);
    }

    #[test]
    fn test_unknown_color_falls_back() {
        let menu = MenuConfig {
            active_bg: "not-a-color".to_string(),
            ..MenuConfig::default()
        };
        assert_eq!(menu.active_bg_color(), DEFAULT_ACTIVE_BG);
    }

    #[test]
    fn test_invalid_placement_is_rejected() {
        let config: Result<Config, _> = toml::from_str("[menu]\nplacement = \"left\"\n");
        assert!(config.is_err());
    }

    // Any subset of the sections and fields parses, filling gaps with defaults
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_menu in prop::bool::ANY,
            include_placement in prop::bool::ANY,
            include_request in prop::bool::ANY,
            policy in prop::sample::select(vec!["accept", "latest", "live-query"])
        ) {
            let mut toml_content = String::new();
            if include_menu {
                toml_content.push_str("[menu]\n");
                if include_placement {
                    toml_content.push_str("placement = \"above\"\n");
                }
            }
            if include_request {
                toml_content.push_str(&format!("[request]\nstale_policy = \"{}\"\n", policy));
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse: {}", toml_content);
            let config = config.unwrap();

            let expected_placement = if include_menu && include_placement {
                Placement::Above
            } else {
                Placement::Below
            };
            prop_assert_eq!(config.menu.placement, expected_placement);
            prop_assert_eq!(config.menu.max_visible, DEFAULT_MAX_VISIBLE);

            let expected_policy = match (include_request, policy) {
                (false, _) => StalePolicy::Accept,
                (true, "accept") => StalePolicy::Accept,
                (true, "latest") => StalePolicy::Latest,
                (true, _) => StalePolicy::LiveQuery,
            };
            prop_assert_eq!(config.request.stale_policy, expected_policy);
        }
    }
}
