use std::fmt;

/// A field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name given to [`Validator::field`](super::Validator::field).
    pub field_name: String,
    /// Control id, for moving focus there.
    pub widget_id: String,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field_name, self.message)
    }
}

/// Outcome of a [`Validator`](super::Validator) run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    #[default]
    Valid,
    /// One entry per failing field, in field order.
    Invalid(Vec<FieldError>),
}

impl From<Vec<FieldError>> for ValidationResult {
    fn from(errors: Vec<FieldError>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    pub fn first_invalid_widget(&self) -> Option<&str> {
        self.first_error().map(|e| e.widget_id.as_str())
    }

    pub fn error_for(&self, field_name: &str) -> Option<&FieldError> {
        self.errors().iter().find(|e| e.field_name == field_name)
    }

    /// Every message, in field order.
    pub fn messages(&self) -> Vec<&str> {
        self.errors().iter().map(|e| e.message.as_str()).collect()
    }

    /// `Ok` when valid, otherwise the failing fields.
    pub fn into_result(self) -> Result<(), Vec<FieldError>> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(errors) => Err(errors),
        }
    }
}
