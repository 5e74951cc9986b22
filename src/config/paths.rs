//! Path resolution for whatidid configuration files.
//!
//! Data lives in `~/.whatidid/` unless `WHATIDID_HOME` points elsewhere:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::AppError;

/// Environment variable overriding the root directory.
pub const HOME_ENV: &str = "WHATIDID_HOME";

/// Paths to whatidid configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.whatidid/`
    pub root: PathBuf,
    /// Config file: `~/.whatidid/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Resolve paths from `WHATIDID_HOME`, falling back to `~/.whatidid`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither `WHATIDID_HOME` nor `HOME` is set.
    pub fn new() -> Result<Self, AppError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME")
            .map_err(|_| AppError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".whatidid")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }
}
