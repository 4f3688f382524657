//! Model-side state for a single bound control.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::debug;

use super::accessor::{ChangeFn, TouchFn, ValueAccessor};
use super::validators::{ValidationError, ValidatorFn};
use crate::events::EventEmitter;

/// Unique identifier for a FormBinding instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(usize);

impl BindingId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for BindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__binding_{}", self.0)
    }
}

struct BindingInner<T> {
    value: Option<T>,
    touched: bool,
    dirty: bool,
    disabled: bool,
    validators: Vec<ValidatorFn<T>>,
    errors: Vec<ValidationError>,
    accessor: Option<Arc<dyn ValueAccessor<T>>>,
}

impl<T> BindingInner<T> {
    fn revalidate(&mut self) {
        let value = self.value.as_ref();
        let errors = self
            .validators
            .iter()
            .filter_map(|validator| validator(value))
            .collect();
        self.errors = errors;
    }
}

/// The form model for one control.
///
/// Cloning is cheap and every clone refers to the same model. A control is
/// attached with [`connect`](FormBinding::connect), which is what
/// [`RadioControl::new`](crate::widgets::radio::RadioControl::new) does when
/// handed a binding.
pub struct FormBinding<T> {
    id: BindingId,
    inner: Arc<RwLock<BindingInner<T>>>,
    value_changes: EventEmitter<Option<T>>,
}

impl<T: Clone + Send + Sync + 'static> FormBinding<T> {
    pub fn new(initial: Option<T>) -> Self {
        Self {
            id: BindingId::new(),
            inner: Arc::new(RwLock::new(BindingInner {
                value: initial,
                touched: false,
                dirty: false,
                disabled: false,
                validators: Vec::new(),
                errors: Vec::new(),
                accessor: None,
            })),
            value_changes: EventEmitter::new(),
        }
    }

    pub fn with_validator(self, validator: ValidatorFn<T>) -> Self {
        self.add_validator(validator);
        self
    }

    /// Add a validator and revalidate the current value.
    pub fn add_validator(&self, validator: ValidatorFn<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.validators.push(validator);
            guard.revalidate();
        }
    }

    pub fn id(&self) -> BindingId {
        self.id
    }

    /// Attach `accessor` as the view for this model.
    ///
    /// The current model value is written down, change and touch callbacks
    /// are registered, and a disabled model disables the accessor. A
    /// previously connected accessor is replaced.
    pub fn connect<A>(&self, accessor: A)
    where
        A: ValueAccessor<T> + 'static,
    {
        let accessor: Arc<dyn ValueAccessor<T>> = Arc::new(accessor);
        let (value, disabled) = self
            .inner
            .read()
            .map(|guard| (guard.value.clone(), guard.disabled))
            .unwrap_or((None, false));

        accessor.write_value(value);

        let weak = Arc::downgrade(&self.inner);
        let emitter = self.value_changes.clone();
        let on_change: ChangeFn<T> = Arc::new(move |value: &T| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let snapshot = match inner.write() {
                Ok(mut guard) => {
                    guard.value = Some(value.clone());
                    guard.dirty = true;
                    guard.revalidate();
                    guard.value.clone()
                }
                Err(_) => return,
            };
            emitter.emit(&snapshot);
        });
        accessor.register_on_change(on_change);

        let weak = Arc::downgrade(&self.inner);
        let on_touched: TouchFn = Arc::new(move || {
            if let Some(inner) = weak.upgrade() {
                if let Ok(mut guard) = inner.write() {
                    guard.touched = true;
                }
            }
        });
        accessor.register_on_touched(on_touched);

        if disabled {
            accessor.set_disabled_state(true);
        }

        debug!("Binding {} connected to accessor", self.id);
        if let Ok(mut guard) = self.inner.write() {
            guard.accessor = Some(accessor);
        }
    }

    pub fn is_connected(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.accessor.is_some())
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Value
    // -------------------------------------------------------------------------

    pub fn value(&self) -> Option<T> {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or(None)
    }

    /// Set the model value and push it into the connected view.
    ///
    /// The view's change callback does not fire; `value_changes` does.
    pub fn set_value(&self, value: Option<T>) {
        let accessor = match self.inner.write() {
            Ok(mut guard) => {
                guard.value = value.clone();
                guard.revalidate();
                guard.accessor.clone()
            }
            Err(_) => return,
        };

        debug!("Binding {} value set from model", self.id);
        if let Some(accessor) = accessor {
            accessor.write_value(value.clone());
        }
        self.value_changes.emit(&value);
    }

    /// Clear the value and the touched/dirty flags.
    pub fn reset(&self) {
        let accessor = match self.inner.write() {
            Ok(mut guard) => {
                guard.value = None;
                guard.touched = false;
                guard.dirty = false;
                guard.revalidate();
                guard.accessor.clone()
            }
            Err(_) => return,
        };

        if let Some(accessor) = accessor {
            accessor.write_value(None);
        }
        self.value_changes.emit(&None);
    }

    /// Notifications for every value change, from either side.
    pub fn value_changes(&self) -> &EventEmitter<Option<T>> {
        &self.value_changes
    }

    // -------------------------------------------------------------------------
    // Interaction flags
    // -------------------------------------------------------------------------

    pub fn touched(&self) -> bool {
        self.inner.read().map(|guard| guard.touched).unwrap_or(false)
    }

    pub fn mark_as_touched(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.touched = true;
        }
    }

    /// True once the user changed the value through the view.
    pub fn dirty(&self) -> bool {
        self.inner.read().map(|guard| guard.dirty).unwrap_or(false)
    }

    pub fn disabled(&self) -> bool {
        self.inner.read().map(|guard| guard.disabled).unwrap_or(false)
    }

    pub fn disable(&self) {
        self.set_disabled(true);
    }

    pub fn enable(&self) {
        self.set_disabled(false);
    }

    fn set_disabled(&self, disabled: bool) {
        let accessor = match self.inner.write() {
            Ok(mut guard) => {
                guard.disabled = disabled;
                guard.accessor.clone()
            }
            Err(_) => return,
        };

        if let Some(accessor) = accessor {
            accessor.set_disabled_state(disabled);
        }
    }

    // -------------------------------------------------------------------------
    // Validity
    // -------------------------------------------------------------------------

    /// Current validation errors. Disabled bindings have none.
    pub fn errors(&self) -> Vec<ValidationError> {
        self.inner
            .read()
            .map(|guard| {
                if guard.disabled {
                    Vec::new()
                } else {
                    guard.errors.clone()
                }
            })
            .unwrap_or_default()
    }

    pub fn has_error(&self, key: &str) -> bool {
        self.errors().iter().any(|error| error.key == key)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}

impl<T> Clone for FormBinding<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            value_changes: self.value_changes.clone(),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Default for FormBinding<T> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<T> fmt::Debug for FormBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormBinding")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
