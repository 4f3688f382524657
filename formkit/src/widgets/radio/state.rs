//! Radio control state.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::{debug, trace};

use super::layout::{RadioLayout, RadioSnapshot};
use super::{DisplayMode, RadioOption, YesNo, yes_no_options};
use crate::config::RadioConfig;
use crate::events::{EventEmitter, SubscriptionId};
use crate::forms::{ChangeFn, ErrorMessages, FormBinding, TouchFn, ValueAccessor, substitute_label};
use crate::validation::{ErrorDisplay, Validatable};

const SELECTED_CHAR: char = '◉';
const UNSELECTED_CHAR: char = '◯';

/// Unique identifier for a RadioControl instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RadioId(usize);

impl RadioId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for RadioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__radio_{}", self.0)
    }
}

struct RadioInner<T> {
    options: Vec<RadioOption<T>>,
    /// `None` until something is selected or written
    value: Option<T>,
    label: String,
    help_text: Option<String>,
    display: DisplayMode,
    disabled: bool,
    /// Show binding errors even before the control is touched
    show_error: bool,
    error_messages: ErrorMessages,
    /// Set by a form-level `Validator`, cleared when the value changes
    validation_error: Option<String>,
    error_display: ErrorDisplay,
    selected_char: char,
    unselected_char: char,
    on_change: Option<ChangeFn<T>>,
    on_touched: Option<TouchFn>,
}

impl<T> Default for RadioInner<T> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            value: None,
            label: String::new(),
            help_text: None,
            display: DisplayMode::default(),
            disabled: false,
            show_error: false,
            error_messages: ErrorMessages::new(),
            validation_error: None,
            error_display: ErrorDisplay::default(),
            selected_char: SELECTED_CHAR,
            unselected_char: UNSELECTED_CHAR,
            on_change: None,
            on_touched: None,
        }
    }
}

/// A radio group holding one selected value out of a list of options.
///
/// `RadioControl` is a cheap handle: clones share the same state. It can run
/// standalone or bound to a [`FormBinding`], in which case it acts as the
/// binding's [`ValueAccessor`].
///
/// User interaction goes through [`set_value`](Self::set_value) (or
/// [`select`](Self::select) by index), which updates the value, notifies the
/// binding, touches it and emits on [`value_change`](Self::value_change).
/// Model pushes go through [`write_value`](ValueAccessor::write_value), which
/// notifies nobody.
///
/// Values are never checked against the options: a value matching no option
/// is kept and simply renders with nothing selected.
pub struct RadioControl<T> {
    id: RadioId,
    inner: Arc<RwLock<RadioInner<T>>>,
    dirty: Arc<AtomicBool>,
    value_change: EventEmitter<T>,
    binding: Option<FormBinding<T>>,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> RadioControl<T> {
    /// Create an empty control, registering it with `binding` if given.
    pub fn new(binding: Option<&FormBinding<T>>) -> Self {
        let mut control = Self::standalone();
        if let Some(binding) = binding {
            control.attach(binding);
        }
        control
    }

    /// Create a control with the default No/Yes options.
    pub fn yes_no(binding: Option<&FormBinding<T>>) -> Self
    where
        T: YesNo,
    {
        let control = Self::new(binding);
        control.set_options(yes_no_options());
        control
    }

    /// Create a control from configuration.
    ///
    /// The configuration is applied before binding, so a bound control ends
    /// up showing the binding's value rather than `config.value`.
    pub fn from_config(config: RadioConfig<T>, binding: Option<&FormBinding<T>>) -> Self {
        let mut control = Self::standalone();
        control.apply_config(config);
        if let Some(binding) = binding {
            control.attach(binding);
        }
        control
    }

    fn standalone() -> Self {
        Self {
            id: RadioId::new(),
            inner: Arc::new(RwLock::new(RadioInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
            value_change: EventEmitter::new(),
            binding: None,
        }
    }

    fn attach(&mut self, binding: &FormBinding<T>) {
        debug!("Radio {} attaching to binding {}", self.id, binding.id());
        binding.connect(self.accessor());
        self.binding = Some(binding.clone());
    }

    /// A handle on the same state without the binding back-reference, so the
    /// binding can own it without a reference cycle.
    fn accessor(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            value_change: self.value_change.clone(),
            binding: None,
        }
    }

    /// Set custom indicator characters
    pub fn with_indicators(self, selected: char, unselected: char) -> Self {
        self.set_indicators(selected, unselected);
        self
    }

    pub fn id(&self) -> RadioId {
        self.id
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// The form model this control was registered with, if any.
    pub fn binding(&self) -> Option<&FormBinding<T>> {
        self.binding.as_ref()
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Set the presentation state in one go.
    ///
    /// Nothing is validated; duplicate values are accepted.
    pub fn configure(
        &self,
        options: Vec<RadioOption<T>>,
        label: impl Into<String>,
        display: DisplayMode,
        help_text: Option<String>,
    ) {
        let label = label.into();
        if let Ok(mut guard) = self.inner.write() {
            guard.options = options;
            guard.label = label;
            guard.display = display;
            guard.help_text = help_text;
        }
        self.mark_dirty();
    }

    /// Apply a full configuration. A `None` value leaves the current value
    /// untouched. On a bound control a configured value is set on the
    /// binding, which writes it back down, so model and view stay in step.
    pub fn apply_config(&self, config: RadioConfig<T>) {
        let RadioConfig {
            options,
            label,
            display,
            help_text,
            value,
            disabled,
            show_error,
            error_messages,
        } = config;

        if let Ok(mut guard) = self.inner.write() {
            guard.options = options;
            guard.label = label;
            guard.display = display;
            guard.help_text = help_text;
            if self.binding.is_none() && value.is_some() {
                guard.value = value.clone();
            }
            guard.disabled = disabled;
            guard.show_error = show_error;
            guard.error_messages = error_messages;
        }
        self.mark_dirty();

        if let (Some(binding), Some(value)) = (&self.binding, value) {
            binding.set_value(Some(value));
        }
    }

    pub fn set_options(&self, options: Vec<RadioOption<T>>) {
        self.update(|inner| inner.options = options);
    }

    pub fn set_label(&self, label: impl Into<String>) {
        let label = label.into();
        self.update(|inner| inner.label = label);
    }

    pub fn set_display(&self, display: DisplayMode) {
        self.update(|inner| inner.display = display);
    }

    pub fn set_help_text(&self, help_text: Option<String>) {
        self.update(|inner| inner.help_text = help_text);
    }

    pub fn set_show_error(&self, show_error: bool) {
        self.update(|inner| inner.show_error = show_error);
    }

    /// Override message templates per error key.
    pub fn set_error_messages(&self, messages: ErrorMessages) {
        self.update(|inner| inner.error_messages = messages);
    }

    pub fn set_indicators(&self, selected: char, unselected: char) {
        self.update(|inner| {
            inner.selected_char = selected;
            inner.unselected_char = unselected;
        });
    }

    fn update(&self, f: impl FnOnce(&mut RadioInner<T>)) {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut guard);
        }
        self.mark_dirty();
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn options(&self) -> Vec<RadioOption<T>> {
        self.read(|inner| inner.options.clone())
            .unwrap_or_default()
    }

    pub fn option_at(&self, index: usize) -> Option<RadioOption<T>> {
        self.read(|inner| inner.options.get(index).cloned())
            .flatten()
    }

    pub fn len(&self) -> usize {
        self.read(|inner| inner.options.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The current value; `None` when unset.
    pub fn value(&self) -> Option<T> {
        self.read(|inner| inner.value.clone()).flatten()
    }

    pub fn label(&self) -> String {
        self.read(|inner| inner.label.clone()).unwrap_or_default()
    }

    pub fn help_text(&self) -> Option<String> {
        self.read(|inner| inner.help_text.clone()).flatten()
    }

    pub fn display(&self) -> DisplayMode {
        self.read(|inner| inner.display).unwrap_or_default()
    }

    pub fn is_disabled(&self) -> bool {
        self.read(|inner| inner.disabled).unwrap_or(false)
    }

    pub fn show_error(&self) -> bool {
        self.read(|inner| inner.show_error).unwrap_or(false)
    }

    fn read<R>(&self, f: impl FnOnce(&RadioInner<T>) -> R) -> Option<R> {
        self.inner.read().ok().map(|guard| f(&guard))
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Whether `option` is the selected one, by value equality.
    pub fn is_selected(&self, option: &RadioOption<T>) -> bool {
        let selected = self.is_value_selected(&option.value);
        trace!("Radio {} option '{}' selected: {}", self.id, option.label, selected);
        selected
    }

    pub fn is_value_selected(&self, value: &T) -> bool {
        self.read(|inner| inner.value.as_ref() == Some(value))
            .unwrap_or(false)
    }

    /// Index of the selected option. With duplicate values the last match
    /// wins.
    pub fn selected_index(&self) -> Option<usize> {
        self.read(|inner| {
            let value = inner.value.as_ref()?;
            inner.options.iter().rposition(|o| &o.value == value)
        })
        .flatten()
    }

    /// Record a user selection.
    ///
    /// In order: store the value, call the change callback, call the touch
    /// callback, emit on [`value_change`](Self::value_change). Selecting the
    /// current value again runs all four. Any form-level validation error
    /// is dropped as stale.
    pub fn set_value(&self, value: T) {
        let (on_change, on_touched) = match self.inner.write() {
            Ok(mut guard) => {
                guard.value = Some(value.clone());
                guard.validation_error = None;
                (guard.on_change.clone(), guard.on_touched.clone())
            }
            Err(_) => return,
        };
        self.mark_dirty();
        debug!("Radio {} value set by user", self.id);

        if let Some(on_change) = on_change {
            on_change(&value);
        }
        if let Some(on_touched) = on_touched {
            on_touched();
        }
        self.value_change.emit(&value);
    }

    /// Select the option at `index` as a user would.
    ///
    /// Returns false when disabled or out of range.
    pub fn select(&self, index: usize) -> bool {
        let value = self
            .read(|inner| {
                if inner.disabled {
                    None
                } else {
                    inner.options.get(index).map(|o| o.value.clone())
                }
            })
            .flatten();

        match value {
            Some(value) => {
                self.set_value(value);
                true
            }
            None => false,
        }
    }

    /// The user left the control.
    pub fn blur(&self) {
        if let Some(on_touched) = self.read(|inner| inner.on_touched.clone()).flatten() {
            on_touched();
        }
    }

    /// Listen for user selections.
    pub fn on_value_change<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.value_change.subscribe(listener)
    }

    pub fn value_change(&self) -> &EventEmitter<T> {
        &self.value_change
    }

    // -------------------------------------------------------------------------
    // Errors
    // -------------------------------------------------------------------------

    /// The message to show under the control, if any.
    ///
    /// A form-level validation error wins until the value next changes,
    /// whether by selection or by a model write. Otherwise the first binding error
    /// is shown once the binding is touched or `show_error` is set, rendered
    /// through the message templates with the label substituted.
    pub fn error_message(&self) -> Option<String> {
        let (validation_error, label, show_error, overrides) = self.read(|inner| {
            (
                inner.validation_error.clone(),
                inner.label.clone(),
                inner.show_error,
                inner.error_messages.clone(),
            )
        })?;

        if validation_error.is_some() {
            return validation_error;
        }

        let binding = self.binding.as_ref()?;
        if !show_error && !binding.touched() {
            return None;
        }

        let error = binding.errors().into_iter().next()?;
        if error.message.is_some() {
            return error.message;
        }

        let rendered = ErrorMessages::defaults()
            .merged(&overrides)
            .render(&error.key, &label)
            .unwrap_or_else(|| substitute_label("{label} is invalid.", &label));
        Some(rendered)
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    pub(crate) fn snapshot(&self) -> RadioSnapshot {
        let error = self.error_message();
        self.read(|inner| {
            // Duplicate values: only the last match renders checked
            let checked = inner
                .value
                .as_ref()
                .and_then(|value| inner.options.iter().rposition(|o| &o.value == value));
            RadioSnapshot {
                label: inner.label.clone(),
                options: inner
                    .options
                    .iter()
                    .enumerate()
                    .map(|(index, o)| (o.label.clone(), checked == Some(index)))
                    .collect(),
                help_text: inner.help_text.clone(),
                error,
                error_display: inner.error_display,
                display: inner.display,
                disabled: inner.disabled,
                selected_char: inner.selected_char,
                unselected_char: inner.unselected_char,
            }
        })
        .unwrap_or_default()
    }

    pub(crate) fn layout(&self) -> RadioLayout {
        RadioLayout::compute(&self.snapshot())
    }

    /// Columns needed to render without clipping.
    pub fn intrinsic_width(&self) -> u16 {
        self.layout().width
    }

    /// Rows needed to render without clipping.
    pub fn intrinsic_height(&self) -> u16 {
        self.layout().height
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Check if the control changed since the last render
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> ValueAccessor<T> for RadioControl<T> {
    fn write_value(&self, value: Option<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value;
            guard.validation_error = None;
        }
        self.mark_dirty();
        debug!("Radio {} value written by model", self.id);
    }

    fn register_on_change(&self, f: ChangeFn<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_change = Some(f);
        }
        debug!("Radio {} change callback registered", self.id);
    }

    fn register_on_touched(&self, f: TouchFn) {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_touched = Some(f);
        }
        debug!("Radio {} touch callback registered", self.id);
    }

    fn set_disabled_state(&self, disabled: bool) {
        self.update(|inner| inner.disabled = disabled);
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Validatable for RadioControl<T> {
    type Value = Option<T>;

    fn validation_value(&self) -> Self::Value {
        self.value()
    }

    fn set_error(&self, msg: impl Into<String>) {
        let msg = msg.into();
        self.update(|inner| inner.validation_error = Some(msg));
    }

    fn clear_error(&self) {
        self.update(|inner| inner.validation_error = None);
    }

    fn error(&self) -> Option<String> {
        self.read(|inner| inner.validation_error.clone()).flatten()
    }

    fn widget_id(&self) -> String {
        self.id_string()
    }

    fn display_label(&self) -> String {
        let label = self.label();
        if label.is_empty() {
            self.id_string()
        } else {
            label
        }
    }

    fn error_display(&self) -> ErrorDisplay {
        self.read(|inner| inner.error_display).unwrap_or_default()
    }

    fn set_error_display(&self, display: ErrorDisplay) {
        self.update(|inner| inner.error_display = display);
    }
}

impl<T> Clone for RadioControl<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            value_change: self.value_change.clone(),
            binding: self.binding.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RadioControl<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("RadioControl");
        debug.field("id", &self.id);
        if let Ok(guard) = self.inner.read() {
            debug
                .field("options", &guard.options)
                .field("value", &guard.value)
                .field("disabled", &guard.disabled);
        }
        debug.field("bound", &self.binding.is_some()).finish()
    }
}
