//! Radio control configuration.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::forms::ErrorMessages;
use crate::widgets::radio::{DisplayMode, RadioOption, YesNo, yes_no_options};

/// Everything a host sets on a radio control before first render.
///
/// Deserializes from camelCase JSON. Missing fields take their defaults:
/// No/Yes options, inline display, no label, no value.
///
/// ```json
/// {
///   "label": "Who is covered?",
///   "display": "stacked",
///   "radioLabels": [
///     { "label": "Myself only", "value": "MyselfOnly" },
///     { "label": "All members on my account", "value": "AllMembers" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(deserialize = "T: Deserialize<'de> + YesNo")
)]
pub struct RadioConfig<T> {
    #[serde(default = "yes_no_options", alias = "radioLabels")]
    pub options: Vec<RadioOption<T>>,

    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub display: DisplayMode,

    #[serde(default, alias = "instructionText")]
    pub help_text: Option<String>,

    /// Initial selection
    #[serde(default)]
    pub value: Option<T>,

    #[serde(default)]
    pub disabled: bool,

    #[serde(default)]
    pub show_error: bool,

    /// Template overrides keyed by error key
    #[serde(default, alias = "errorMessage")]
    pub error_messages: ErrorMessages,
}

impl<T> RadioConfig<T> {
    /// A configuration with the given options and everything else default.
    pub fn with_options(options: Vec<RadioOption<T>>) -> Self {
        Self {
            options,
            label: String::new(),
            display: DisplayMode::default(),
            help_text: None,
            value: None,
            disabled: false,
            show_error: false,
            error_messages: ErrorMessages::new(),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn display(mut self, display: DisplayMode) -> Self {
        self.display = display;
        self
    }

    pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    pub fn value(mut self, value: T) -> Self {
        self.value = Some(value);
        self
    }

    pub fn option(mut self, label: impl Into<String>, value: T) -> Self {
        self.options.push(RadioOption::new(label, value));
        self
    }
}

impl<T: YesNo> Default for RadioConfig<T> {
    fn default() -> Self {
        Self::with_options(yes_no_options())
    }
}

impl<T: DeserializeOwned + YesNo> RadioConfig<T> {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// Errors that can occur when loading a radio configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid radio config: {0}")]
    Json(#[from] serde_json::Error),
}
