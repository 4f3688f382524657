//! Fluent validator builder.

use std::future::Future;

use futures::future::BoxFuture;
use log::debug;

use super::result::{FieldError, ValidationResult};
use super::validatable::Validatable;
use crate::forms::{REQUIRED_TEMPLATE, substitute_label};

/// One check on a field value, kept in the order it was declared.
enum Rule<V> {
    Sync(Box<dyn Fn(&V) -> bool + Send + Sync>, String),
    Async(Box<dyn Fn(V) -> BoxFuture<'static, bool> + Send + Sync>, String),
}

/// A control together with its rules.
struct BoundField<W: Validatable> {
    name: String,
    widget: W,
    rules: Vec<Rule<W::Value>>,
}

/// The type-erased view a [`Validator`] has of each field.
trait FieldCheck: Send + Sync {
    fn name(&self) -> &str;

    fn widget_id(&self) -> String;

    /// First failing synchronous rule. Asynchronous rules are skipped.
    fn check(&self) -> Option<String>;

    /// First failing rule of any kind, in declaration order.
    fn check_async(&self) -> BoxFuture<'_, Option<String>>;

    /// Write the outcome back onto the control.
    fn report(&self, failure: Option<&str>);
}

impl<W> FieldCheck for BoundField<W>
where
    W: Validatable,
    W::Value: Clone + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn widget_id(&self) -> String {
        self.widget.widget_id()
    }

    fn check(&self) -> Option<String> {
        let value = self.widget.validation_value();
        self.rules.iter().find_map(|rule| match rule {
            Rule::Sync(passes, msg) if !passes(&value) => Some(msg.clone()),
            _ => None,
        })
    }

    fn check_async(&self) -> BoxFuture<'_, Option<String>> {
        let value = self.widget.validation_value();
        Box::pin(async move {
            for rule in &self.rules {
                let (passed, msg) = match rule {
                    Rule::Sync(passes, msg) => (passes(&value), msg),
                    Rule::Async(passes, msg) => (passes(value.clone()).await, msg),
                };
                if !passed {
                    return Some(msg.clone());
                }
            }
            None
        })
    }

    fn report(&self, failure: Option<&str>) {
        match failure {
            Some(msg) => self.widget.set_error(msg),
            None => self.widget.clear_error(),
        }
    }
}

/// Validates several controls at once.
///
/// Each field reports only its first failing rule. Failing controls receive
/// the message through [`Validatable::set_error`], passing ones are cleared.
#[derive(Default)]
pub struct Validator {
    fields: Vec<Box<dyn FieldCheck>>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start adding rules for `widget`.
    pub fn field<W>(self, widget: &W, name: impl Into<String>) -> FieldBuilder<W>
    where
        W: Validatable + Clone + 'static,
        W::Value: Clone + Send + Sync + 'static,
    {
        FieldBuilder {
            validator: self,
            field: BoundField {
                name: name.into(),
                widget: widget.clone(),
                rules: Vec::new(),
            },
        }
    }

    /// Run the synchronous rules only.
    pub fn validate(self) -> ValidationResult {
        let failures = self.fields.iter().map(|field| field.check()).collect();
        self.settle(failures)
    }

    /// Run every rule, field by field.
    pub async fn validate_async(self) -> ValidationResult {
        let mut failures = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            failures.push(field.check_async().await);
        }
        self.settle(failures)
    }

    fn settle(&self, failures: Vec<Option<String>>) -> ValidationResult {
        let mut errors = Vec::new();
        for (field, failure) in self.fields.iter().zip(failures) {
            field.report(failure.as_deref());
            if let Some(message) = failure {
                debug!("Field '{}' failed validation: {}", field.name(), message);
                errors.push(FieldError {
                    field_name: field.name().to_string(),
                    widget_id: field.widget_id(),
                    message,
                });
            }
        }
        errors.into()
    }
}

/// Rules for a single field, returned by [`Validator::field`].
pub struct FieldBuilder<W: Validatable> {
    validator: Validator,
    field: BoundField<W>,
}

impl<W> FieldBuilder<W>
where
    W: Validatable + Clone + 'static,
    W::Value: Clone + Send + Sync + 'static,
{
    /// Add a rule; `msg` is reported when `f` returns false.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&W::Value) -> bool + Send + Sync + 'static,
    {
        self.field.rules.push(Rule::Sync(Box::new(f), msg.into()));
        self
    }

    /// Add an asynchronous rule, run only by [`Validator::validate_async`].
    pub fn rule_async<F, Fut>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(W::Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        let passes = move |value: W::Value| -> BoxFuture<'static, bool> { Box::pin(f(value)) };
        self.field.rules.push(Rule::Async(Box::new(passes), msg.into()));
        self
    }

    /// Continue with the next field.
    pub fn field<W2>(self, widget: &W2, name: impl Into<String>) -> FieldBuilder<W2>
    where
        W2: Validatable + Clone + 'static,
        W2::Value: Clone + Send + Sync + 'static,
    {
        self.finish().field(widget, name)
    }

    pub fn validate(self) -> ValidationResult {
        self.finish().validate()
    }

    pub async fn validate_async(self) -> ValidationResult {
        self.finish().validate_async().await
    }

    fn finish(self) -> Validator {
        let mut validator = self.validator;
        validator.fields.push(Box::new(self.field));
        validator
    }
}

// Built-in rules for optional selections
impl<V, W> FieldBuilder<W>
where
    V: Clone + PartialEq + Send + Sync + 'static,
    W: Validatable<Value = Option<V>> + Clone + 'static,
{
    /// Require a selection, reporting `msg`.
    pub fn selected(self, msg: impl Into<String>) -> Self {
        self.rule(|v: &Option<V>| v.is_some(), msg)
    }

    /// Require a selection, reporting the required template with the
    /// control's label.
    pub fn required(self) -> Self {
        let msg = substitute_label(REQUIRED_TEMPLATE, &self.field.widget.display_label());
        self.selected(msg)
    }

    /// Require the selection to be exactly `expected`.
    pub fn equals(self, expected: V, msg: impl Into<String>) -> Self {
        self.rule(move |v: &Option<V>| v.as_ref() == Some(&expected), msg)
    }

    /// Require the selection, if any, to be one of `allowed`.
    pub fn one_of(self, allowed: Vec<V>, msg: impl Into<String>) -> Self {
        self.rule(
            move |v: &Option<V>| v.as_ref().is_none_or(|value| allowed.contains(value)),
            msg,
        )
    }
}
