use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while setting up a widget; the controller itself never fails
#[derive(Debug, Error)]
pub enum TypeaheadError {
    #[error("Could not read config file {}: {}", .path.display(), .source)]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {}", .path.display(), .source)]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not read word list {}: {}", .path.display(), .source)]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
