//! Configuration loading
//!
//! The config file is optional. A missing file at the default location
//! yields the defaults; a path given explicitly must exist and parse.

mod types;

pub use types::{Config, MenuConfig, Placement, RequestConfig};

use std::path::{Path, PathBuf};

use crate::error::TypeaheadError;

/// `<config_dir>/typeahead/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("typeahead").join("config.toml"))
}

/// Load the config from `explicit`, or from the default location
pub fn load_config(explicit: Option<&Path>) -> Result<Config, TypeaheadError> {
    match explicit {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        },
    }
}

/// Parse a config file at `path`
pub fn read_config(path: &Path) -> Result<Config, TypeaheadError> {
    let content = std::fs::read_to_string(path).map_err(|source| TypeaheadError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config = toml::from_str(&content).map_err(|source| TypeaheadError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}
