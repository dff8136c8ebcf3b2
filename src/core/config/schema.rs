//! core::config::schema
//!
//! Settings file schema.
//!
//! # Location
//!
//! Searched in order:
//! 1. `--config <path>`
//! 2. `$REGISTRAR_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/registrar/config.toml`
//! 4. `~/.registrar/config.toml`
//!
//! # Validation
//!
//! Values are validated after parsing (e.g., the id prefix must be
//! non-empty ASCII alphanumeric).

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Settings file contents.
///
/// # Example
///
/// ```toml
/// email = "required"
/// student_ids = "generated"
///
/// [ids]
/// prefix = "ST"
/// width = 3
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrarConfig {
    /// Whether a student email must be given
    pub email: Option<EmailPolicy>,

    /// Where student ids come from
    pub student_ids: Option<StudentIdMode>,

    /// Generated id format
    pub ids: Option<IdsConfig>,
}

impl RegistrarConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ids) = &self.ids {
            ids.validate()?;
        }
        Ok(())
    }
}

/// Email requirement when registering a student.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmailPolicy {
    /// Blank input stores no email
    #[default]
    Optional,
    /// Blank input re-prompts
    Required,
}

/// Source of student ids.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StudentIdMode {
    /// Prefix plus zero-padded sequence number
    #[default]
    Generated,
    /// Typed by the user, duplicates re-prompt
    Manual,
}

/// Generated id format settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct IdsConfig {
    /// Id prefix (default: "ST")
    pub prefix: Option<String>,

    /// Minimum digit count (default: 3)
    pub width: Option<usize>,
}

impl IdsConfig {
    /// Allowed range for `width`.
    pub const WIDTH_RANGE: std::ops::RangeInclusive<usize> = 1..=9;

    /// Validate the id format settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(prefix) = &self.prefix {
            if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid id prefix '{}', must be non-empty ASCII letters or digits",
                    prefix
                )));
            }
        }

        if let Some(width) = self.width {
            if !Self::WIDTH_RANGE.contains(&width) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid id width {}, must be between {} and {}",
                    width,
                    Self::WIDTH_RANGE.start(),
                    Self::WIDTH_RANGE.end()
                )));
            }
        }

        Ok(())
    }
}
