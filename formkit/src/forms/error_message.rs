//! Error message templates keyed by validation error key.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::validators::REQUIRED;

/// Placeholder replaced by the control label when a template is rendered.
pub const LABEL_REPLACEMENT_TAG: &str = "{label}";

/// Default message for [`REQUIRED`](super::REQUIRED) errors.
pub const REQUIRED_TEMPLATE: &str = "{label} is required.";

/// Replace every label tag in `template` with `label`.
pub fn substitute_label(template: &str, label: &str) -> String {
    template.replace(LABEL_REPLACEMENT_TAG, label)
}

/// Message templates keyed by error key (`"required"`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMessages(HashMap<String, String>);

impl ErrorMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// The templates every control starts from.
    pub fn defaults() -> Self {
        Self::new().with(REQUIRED, REQUIRED_TEMPLATE)
    }

    pub fn with(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(key, template);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.0.insert(key.into(), template.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A copy of `self` with `overrides` taking precedence.
    pub fn merged(&self, overrides: &ErrorMessages) -> ErrorMessages {
        let mut merged = self.clone();
        for (key, template) in &overrides.0 {
            merged.insert(key.clone(), template.clone());
        }
        merged
    }

    /// Render the template for `key` with `label` substituted.
    pub fn render(&self, key: &str, label: &str) -> Option<String> {
        self.get(key).map(|template| substitute_label(template, label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_default_substitutes_label() {
        let messages = ErrorMessages::defaults();
        assert_eq!(
            messages.render(REQUIRED, "Gender").as_deref(),
            Some("Gender is required.")
        );
    }

    #[test]
    fn overrides_win() {
        let overrides = ErrorMessages::new().with(REQUIRED, "Please pick a {label}");
        let merged = ErrorMessages::defaults().merged(&overrides);
        assert_eq!(
            merged.render(REQUIRED, "colour").as_deref(),
            Some("Please pick a colour")
        );
    }

    #[test]
    fn unknown_key_renders_nothing() {
        assert_eq!(ErrorMessages::defaults().render("pattern", "x"), None);
    }
}
