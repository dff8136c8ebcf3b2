//! core::config
//!
//! Settings loading.
//!
//! # Overview
//!
//! Registrar reads a single optional TOML settings file. It tunes how
//! students are registered; it never stores registry data.
//!
//! # Precedence
//!
//! 1. Default values
//! 2. Settings file (first location found)
//! 3. CLI flags (not handled here)
//!
//! # Locations
//!
//! Searched in order:
//! 1. An explicit path (`--config`), which must exist
//! 2. `$REGISTRAR_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/registrar/config.toml`
//! 4. `~/.registrar/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use registrar::core::config::{Config, EmailPolicy};
//!
//! let config = Config::load(None).unwrap();
//! if config.email_policy() == EmailPolicy::Required {
//!     // prompt until an email is given
//! }
//! let prefix = config.id_format().prefix;
//! ```

pub mod schema;

pub use schema::{EmailPolicy, IdsConfig, RegistrarConfig, StudentIdMode};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::naming::{IdFormat, DEFAULT_PREFIX, DEFAULT_WIDTH};

/// Environment variable naming a settings file.
pub const CONFIG_ENV: &str = "REGISTRAR_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file '{0}' does not exist")]
    NotFound(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration with defaults applied through accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed settings file (defaults if none was found)
    pub file: RegistrarConfig,
    /// Path the settings were loaded from
    path: Option<PathBuf>,
}

impl Config {
    /// Build a configuration from already parsed settings.
    pub fn from_file(file: RegistrarConfig) -> Result<Self, ConfigError> {
        file.validate()?;
        Ok(Self { file, path: None })
    }

    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` is given but missing, or if a settings
    /// file exists but cannot be read, parsed, or validated. A missing
    /// settings file in the default locations is not an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(explicit, |key| std::env::var(key).ok(), dirs::home_dir())
    }

    /// Load configuration with injected environment lookups.
    pub fn load_with<F>(
        explicit: Option<&Path>,
        env: F,
        home: Option<PathBuf>,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::read(path);
        }

        match Self::locate(env, home) {
            Some(path) => Self::read(&path),
            None => Ok(Self::default()),
        }
    }

    /// Find the first existing settings file in the default locations.
    fn locate<F>(env: F, home: Option<PathBuf>) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        let candidates = [
            env(CONFIG_ENV).map(PathBuf::from),
            env("XDG_CONFIG_HOME").map(|xdg| PathBuf::from(xdg).join("registrar/config.toml")),
            home.map(|home| home.join(".registrar/config.toml")),
        ];
        candidates.into_iter().flatten().find(|path| path.exists())
    }

    /// Read, parse, and validate a settings file.
    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: RegistrarConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        file.validate()?;

        Ok(Self {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Email requirement.
    ///
    /// Defaults to [`EmailPolicy::Optional`].
    pub fn email_policy(&self) -> EmailPolicy {
        self.file.email.unwrap_or_default()
    }

    /// Source of student ids.
    ///
    /// Defaults to [`StudentIdMode::Generated`].
    pub fn student_id_mode(&self) -> StudentIdMode {
        self.file.student_ids.unwrap_or_default()
    }

    /// Generated student id format.
    ///
    /// Defaults to prefix `ST`, width 3.
    pub fn id_format(&self) -> IdFormat {
        let ids = self.file.ids.as_ref();
        IdFormat {
            prefix: ids
                .and_then(|i| i.prefix.clone())
                .unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            width: ids.and_then(|i| i.width).unwrap_or(DEFAULT_WIDTH),
        }
    }

    /// Get the path the settings were loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
