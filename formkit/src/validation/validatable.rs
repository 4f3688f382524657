/// Where a control shows its validation message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorDisplay {
    /// On its own row under the control.
    #[default]
    Below,
    /// Appended to the label row.
    Inline,
    /// Not shown; the message is still available to the host.
    None,
}

/// A control whose value can be checked by a [`Validator`](super::Validator).
pub trait Validatable: Send + Sync {
    type Value;

    fn validation_value(&self) -> Self::Value;

    fn set_error(&self, msg: impl Into<String>);

    fn clear_error(&self);

    fn error(&self) -> Option<String>;

    fn has_error(&self) -> bool {
        self.error().is_some()
    }

    fn widget_id(&self) -> String;

    /// Human-facing name used by message templates.
    fn display_label(&self) -> String {
        self.widget_id()
    }

    fn error_display(&self) -> ErrorDisplay;

    fn set_error_display(&self, display: ErrorDisplay);
}
