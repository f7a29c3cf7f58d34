//! codemark config
//!
//! Typed, read-only view over the user's display settings. Built once from a
//! loosely typed JSON object; wrong-typed or missing values fall back to
//! defaults, unknown keys are ignored. Nothing can be changed after
//! construction.
//!
//! # Example
//!
//! ```
//! use codemark_config::Config;
//!
//! let config = Config::from_json_str(r#"{ "showURL": true }"#).unwrap();
//! assert!(config.get("showURL").unwrap());
//! assert!(!config.get("showLinks").unwrap());
//! assert!(config.get("showUrl").is_err());
//! ```

mod lenient;
pub mod pretty;
pub mod sections;

use serde::Deserialize;
use serde_json::Value;

pub use pretty::{PrettyConfig, StyleRule, StyleTable};
pub use sections::{QuestionsConfig, SearchBarConfig};

/// Names accepted by [`Config::get`].
pub const SETTING_NAMES: &[&str] = &["showURL", "showLinks"];

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The caller asked for a setting that does not exist.
    #[error("The given setting does not exist: {name:?}")]
    InvalidSetting { name: String },
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(rename = "showURL", default, deserialize_with = "lenient::flag")]
    show_url: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    show_links: bool,
    #[serde(rename = "searchSettings", default, deserialize_with = "lenient::section")]
    search_bar: SearchBarConfig,
    #[serde(rename = "questionFormat", default, deserialize_with = "lenient::section")]
    questions: QuestionsConfig,
    #[serde(rename = "prettyCode", default, deserialize_with = "lenient::section")]
    pretty: PrettyConfig,
}

impl Config {
    /// Build from a JSON value. Anything but an object gives the defaults.
    pub fn new(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Parse JSON text, then build as [`Config::new`] does.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(source)?;
        Ok(Self::new(value))
    }

    /// Look up a boolean setting by its config key.
    ///
    /// Unknown names are a programming error and fail with
    /// [`ConfigError::InvalidSetting`].
    pub fn get(&self, name: &str) -> Result<bool, ConfigError> {
        match name {
            "showURL" => Ok(self.show_url),
            "showLinks" => Ok(self.show_links),
            _ => Err(ConfigError::InvalidSetting {
                name: name.to_string(),
            }),
        }
    }

    pub fn show_url(&self) -> bool {
        self.show_url
    }

    pub fn show_links(&self) -> bool {
        self.show_links
    }

    pub fn search_bar(&self) -> &SearchBarConfig {
        &self.search_bar
    }

    pub fn questions(&self) -> &QuestionsConfig {
        &self.questions
    }

    pub fn pretty(&self) -> &PrettyConfig {
        &self.pretty
    }

    /// Return a copy with the prettifier settings replaced.
    pub fn with_pretty(self, pretty: PrettyConfig) -> Self {
        Self { pretty, ..self }
    }
}
