//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$GITMINI_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitmini/config.toml`
//! 3. `~/.gitmini/config.toml`
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Example
//!
//! ```no_run
//! use gitmini::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Debug: {}", config.debug());
//! println!("Forced checkout: {}", config.checkout_force());
//! ```

pub mod schema;

pub use schema::{CheckoutDefaults, FileConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "GITMINI_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Loaded configuration with accessors that apply defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents (all fields optional)
    pub file: FileConfig,
    /// Path of the file that was loaded, if any
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    /// A missing config file is not an error (defaults are used).
    pub fn load() -> Result<Self, ConfigError> {
        match Self::locate() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file = Self::parse(&contents).map_err(|message| ConfigError::ParseError {
            path: path.to_path_buf(),
            message,
        })?;

        Ok(Self {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    fn parse(contents: &str) -> Result<FileConfig, String> {
        toml::from_str(contents).map_err(|e| e.to_string())
    }

    /// Find the first existing config file in lookup order.
    pub fn locate() -> Option<PathBuf> {
        let candidates = [
            std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            std::env::var_os("XDG_CONFIG_HOME")
                .map(|xdg| PathBuf::from(xdg).join("gitmini/config.toml")),
            dirs::home_dir().map(|home| home.join(".gitmini/config.toml")),
        ];

        candidates.into_iter().flatten().find(|path| path.is_file())
    }

    /// Path of the loaded file, if one was found.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Check if debug diagnostics are enabled by default.
    ///
    /// Defaults to `false` if not configured.
    pub fn debug(&self) -> bool {
        self.file.debug.unwrap_or(false)
    }

    /// Check if checkout should overwrite local modifications.
    ///
    /// Defaults to `false` if not configured.
    pub fn checkout_force(&self) -> bool {
        self.file
            .checkout
            .as_ref()
            .and_then(|c| c.force)
            .unwrap_or(false)
    }
}
