//! Validators run by [`FormBinding`](super::FormBinding) on every value change.

use std::sync::Arc;

/// Error key produced by [`Validators::required`].
pub const REQUIRED: &str = "required";

/// A single failed validator.
///
/// `key` selects the message template; an explicit `message` bypasses the
/// templates entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub key: String,
    pub message: Option<String>,
}

impl ValidationError {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn required() -> Self {
        Self::new(REQUIRED)
    }
}

/// A validator over the binding's current value (`None` when unset).
pub type ValidatorFn<T> = Arc<dyn Fn(Option<&T>) -> Option<ValidationError> + Send + Sync>;

/// Built-in validators.
pub struct Validators;

impl Validators {
    /// Fails when no value is set.
    pub fn required<T>() -> ValidatorFn<T> {
        Arc::new(|value: Option<&T>| match value {
            Some(_) => None,
            None => Some(ValidationError::required()),
        })
    }

    /// Fails with `key` whenever `valid` returns false.
    pub fn custom<T, F>(key: impl Into<String>, valid: F) -> ValidatorFn<T>
    where
        F: Fn(Option<&T>) -> bool + Send + Sync + 'static,
    {
        let key = key.into();
        Arc::new(move |value: Option<&T>| {
            if valid(value) {
                None
            } else {
                Some(ValidationError::new(key.clone()))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_only_fails_when_unset() {
        let required = Validators::required::<bool>();
        assert_eq!(required(None), Some(ValidationError::required()));
        assert_eq!(required(Some(&false)), None);
    }

    #[test]
    fn custom_uses_its_key() {
        let not_no = Validators::custom("mustAgree", |v: Option<&bool>| v == Some(&true));
        assert_eq!(not_no(Some(&false)).map(|e| e.key), Some("mustAgree".into()));
        assert_eq!(not_no(Some(&true)), None);
    }
}
