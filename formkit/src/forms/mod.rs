//! Host form model and the value-accessor contract.
//!
//! A [`FormBinding`] owns the model-side value of one control. Controls
//! implement [`ValueAccessor`] so the binding can push values down and learn
//! about user changes and touches.
//!
//! # Example
//!
//! ```ignore
//! use formkit::prelude::*;
//!
//! let gender = FormBinding::new(None).with_validator(Validators::required());
//! let radio = RadioControl::new(Some(&gender));
//! radio.configure(
//!     vec![RadioOption::new("Male", "M"), RadioOption::new("Female", "F")],
//!     "Gender",
//!     DisplayMode::Stacked,
//!     None,
//! );
//!
//! radio.select(1);
//! assert_eq!(gender.value(), Some("F"));
//! ```

mod accessor;
mod binding;
mod error_message;
mod validators;

pub use accessor::{ChangeFn, TouchFn, ValueAccessor};
pub use binding::{BindingId, FormBinding};
pub use error_message::{
    ErrorMessages, LABEL_REPLACEMENT_TAG, REQUIRED_TEMPLATE, substitute_label,
};
pub use validators::{REQUIRED, ValidationError, ValidatorFn, Validators};
