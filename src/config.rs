//! Resolution of the directory holding the board snapshot.

use camino::{Utf8Path, Utf8PathBuf};
use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable overriding the snapshot directory.
pub const STORE_DIR_ENV: &str = "TASKBOARD_DIR";

const APPLICATION: &str = "taskboard";

/// Errors raised while resolving configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No platform data directory could be determined.
    #[error("could not determine a data directory; set {STORE_DIR_ENV}")]
    NoDataDirectory,
    /// A configured path is not valid UTF-8.
    #[error("path is not valid UTF-8: {0:?}")]
    NonUtf8Path(PathBuf),
}

/// Where the board snapshot lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    store_dir: Utf8PathBuf,
}

impl StoreConfig {
    /// Uses `store_dir` as-is.
    #[must_use]
    pub fn new(store_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            store_dir: store_dir.into(),
        }
    }

    /// Resolves the snapshot directory.
    ///
    /// Precedence: `explicit`, then a non-empty [`STORE_DIR_ENV`], then the
    /// platform data directory for the application.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the environment value is not UTF-8 or no
    /// platform data directory exists.
    pub fn resolve(explicit: Option<Utf8PathBuf>) -> Result<Self, ConfigError> {
        if let Some(store_dir) = explicit {
            return Ok(Self::new(store_dir));
        }

        if let Some(value) = std::env::var_os(STORE_DIR_ENV).filter(|value| !value.is_empty()) {
            let store_dir = Utf8PathBuf::from_path_buf(PathBuf::from(value))
                .map_err(ConfigError::NonUtf8Path)?;
            return Ok(Self::new(store_dir));
        }

        let dirs = ProjectDirs::from("", "", APPLICATION).ok_or(ConfigError::NoDataDirectory)?;
        let store_dir = Utf8PathBuf::from_path_buf(dirs.data_dir().to_path_buf())
            .map_err(ConfigError::NonUtf8Path)?;
        Ok(Self::new(store_dir))
    }

    /// Returns the snapshot directory.
    #[must_use]
    pub fn store_dir(&self) -> &Utf8Path {
        &self.store_dir
    }
}
