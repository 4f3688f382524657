use std::sync::Arc;

/// Callback a binding registers to hear about user-driven value changes.
pub type ChangeFn<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Callback a binding registers to hear that the control was touched.
pub type TouchFn = Arc<dyn Fn() + Send + Sync>;

/// Contract between a custom control and the form model driving it.
///
/// The model calls [`write_value`](ValueAccessor::write_value) to push a value
/// into the view; the view reports back through the registered callbacks.
/// Registering a callback replaces any previous one.
pub trait ValueAccessor<T>: Send + Sync {
    /// Set the displayed value without notifying anyone.
    fn write_value(&self, value: Option<T>);

    fn register_on_change(&self, f: ChangeFn<T>);

    fn register_on_touched(&self, f: TouchFn);

    /// Enable or disable user interaction. Controls without a disabled
    /// appearance may ignore this.
    fn set_disabled_state(&self, _disabled: bool) {}
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// An accessor with no disabled appearance.
    struct Plain(Mutex<Option<u8>>);

    impl ValueAccessor<u8> for Plain {
        fn write_value(&self, value: Option<u8>) {
            *self.0.lock().unwrap() = value;
        }

        fn register_on_change(&self, _f: ChangeFn<u8>) {}

        fn register_on_touched(&self, _f: TouchFn) {}
    }

    #[test]
    fn disabled_state_defaults_to_no_op() {
        let accessor: Arc<dyn ValueAccessor<u8>> = Arc::new(Plain(Mutex::new(Some(3))));
        accessor.set_disabled_state(true);
        accessor.write_value(Some(4));
        accessor.set_disabled_state(false);
    }
}
