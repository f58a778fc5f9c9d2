//! Configuration management for acton-forms
//!
//! Rendering defaults (error class, method override parameter, checkbox
//! values, ...) are loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `ACTON_FORMS_` prefix)
//! 2. `./form_helpers.toml` (development)
//! 3. `~/.config/acton-forms/form_helpers.toml` (user config, XDG)
//! 4. `/etc/acton-forms/form_helpers.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # form_helpers.toml
//! error_class = "is-invalid"
//! method_param = "_method"
//! delete_button_text = "Remove"
//! unknown_record_state = "assume_new"
//!
//! [checkbox]
//! class = "checkbox"
//! on = "yes"
//! off = "no"
//!
//! [error_summary]
//! class = "alert"
//! ```

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// File name looked up in each configuration location
pub const CONFIG_FILE_NAME: &str = "form_helpers.toml";

/// Checkbox rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckboxSettings {
    /// Base CSS class for every checkbox
    pub class: String,

    /// Value submitted for a checked box
    pub on: String,

    /// Value rendered for an unchecked box
    pub off: String,
}

impl Default for CheckboxSettings {
    fn default() -> Self {
        Self {
            class: "checkbox".to_string(),
            on: "1".to_string(),
            off: "0".to_string(),
        }
    }
}

/// Error summary rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorSummarySettings {
    /// CSS class of the wrapping `<div>`
    pub class: String,
}

impl Default for ErrorSummarySettings {
    fn default() -> Self {
        Self {
            class: "error".to_string(),
        }
    }
}

/// How `form_for` treats an object that cannot report whether it is new
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatePolicy {
    /// Treat the object as new: plain POST, no method override
    #[default]
    AssumeNew,
    /// Treat the object as persisted: inject the PUT override
    AssumePersisted,
}

impl RecordStatePolicy {
    /// Resolve a reported record state against this policy
    #[must_use]
    pub const fn is_new(self, reported: Option<bool>) -> bool {
        match reported {
            Some(is_new) => is_new,
            None => matches!(self, Self::AssumeNew),
        }
    }
}

/// Complete form helper configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormHelpersConfig {
    /// Class token added to controls whose attribute has errors
    pub error_class: String,

    /// Name of the hidden field carrying the real HTTP verb
    pub method_param: String,

    /// Default inner text of `delete_button`
    pub delete_button_text: String,

    /// Record state assumed when a bound object cannot tell
    pub unknown_record_state: RecordStatePolicy,

    /// Checkbox settings
    pub checkbox: CheckboxSettings,

    /// Error summary settings
    pub error_summary: ErrorSummarySettings,
}

impl Default for FormHelpersConfig {
    fn default() -> Self {
        Self {
            error_class: "error".to_string(),
            method_param: "_method".to_string(),
            delete_button_text: "Delete".to_string(),
            unknown_record_state: RecordStatePolicy::default(),
            checkbox: CheckboxSettings::default(),
            error_summary: ErrorSummarySettings::default(),
        }
    }
}

impl FormHelpersConfig {
    /// Load configuration from the standard locations
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file exists but contains invalid TOML
    /// - A value fails type conversion
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use acton_forms::config::FormHelpersConfig;
    ///
    /// # fn example() -> Result<(), acton_forms::error::FormHelperError> {
    /// let config = FormHelpersConfig::load()?;
    /// assert!(!config.error_class.is_empty());
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        let mut figment = Self::defaults()?;

        let system_config = PathBuf::from("/etc/acton-forms").join(CONFIG_FILE_NAME);
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from(".").join(CONFIG_FILE_NAME);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        Ok(Self::with_env(figment).extract()?)
    }

    /// Load configuration from a specific file, still honouring the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or a value fails
    /// type conversion. A missing file falls back to defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let figment = Self::defaults()?.merge(Toml::file(path.as_ref()));
        Ok(Self::with_env(figment).extract()?)
    }

    /// Get the recommended XDG config path
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from(".").join(CONFIG_FILE_NAME),
            |config_dir| config_dir.join("acton-forms").join(CONFIG_FILE_NAME),
        )
    }

    fn defaults() -> Result<Figment> {
        Ok(Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?)))
    }

    fn with_env(figment: Figment) -> Figment {
        figment.merge(Env::prefixed("ACTON_FORMS_").split("__").lowercase(true))
    }
}
