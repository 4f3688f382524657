//! Form controls for terminal user interfaces.
//!
//! The centerpiece is [`RadioControl`](widgets::radio::RadioControl), a radio
//! group that plugs into a host form model through the
//! [`ValueAccessor`](forms::ValueAccessor) contract.

pub mod config;
pub mod events;
pub mod forms;
pub mod keybinds;
pub mod validation;
pub mod widgets;

pub mod prelude {
    pub use crate::config::{ConfigError, RadioConfig};
    pub use crate::events::{ControlEvents, EventEmitter, EventResult, SubscriptionId};
    pub use crate::forms::{
        ErrorMessages, FormBinding, ValidationError, ValidatorFn, Validators, ValueAccessor,
    };
    pub use crate::keybinds::{Key, KeyCombo, Modifiers};
    pub use crate::validation::{
        ErrorDisplay, FieldError, Validatable, ValidationResult, Validator,
    };
    pub use crate::widgets::radio::{
        DisplayMode, RadioControl, RadioGroupView, RadioId, RadioOption, YesNo,
        render_radio_group, yes_no_options,
    };
}
