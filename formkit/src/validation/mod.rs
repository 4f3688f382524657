//! Form-level validation over controls.
//!
//! Where a [`FormBinding`](crate::forms::FormBinding) validates one value as
//! it changes, a [`Validator`] checks a whole form at submit time and writes
//! the first failure of each field back onto the control.
//!
//! # Example
//!
//! ```ignore
//! use formkit::validation::Validator;
//!
//! let result = Validator::new()
//!     .field(&self.gender, "gender")
//!         .required()
//!     .field(&self.consent, "consent")
//!         .equals(true, "You must agree to continue")
//!     .validate();
//!
//! if let Some(widget) = result.first_invalid_widget() {
//!     log::debug!("first invalid control: {widget}");
//! }
//! ```

mod result;
mod validatable;
mod validator;

pub use result::{FieldError, ValidationResult};
pub use validatable::{ErrorDisplay, Validatable};
pub use validator::{FieldBuilder, Validator};
