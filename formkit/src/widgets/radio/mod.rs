//! Radio group control bound to a form model.
//!
//! # Example
//!
//! ```ignore
//! use formkit::prelude::*;
//!
//! let scope = FormBinding::new(None).with_validator(Validators::required());
//! let radio = RadioControl::new(Some(&scope));
//! radio.configure(
//!     vec![
//!         RadioOption::new("Myself only", "MyselfOnly"),
//!         RadioOption::new("All members on my account", "AllMembers"),
//!     ],
//!     "Who is this for?",
//!     DisplayMode::Stacked,
//!     Some("Pick one".into()),
//! );
//!
//! radio.on_value_change(|value| log::info!("picked {value}"));
//! frame.render_widget(RadioGroupView::new(&radio).focused(true), area);
//! ```

mod events;
mod layout;
mod render;
mod state;

use serde::{Deserialize, Serialize};

pub use render::{RadioGroupView, render_radio_group};
pub use state::{RadioControl, RadioId};

/// One selectable entry: the text shown and the value it stands for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioOption<T> {
    pub label: String,
    pub value: T,
}

impl<T> RadioOption<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Value types with a natural yes/no pair, used for the default options.
pub trait YesNo {
    fn no() -> Self;

    fn yes() -> Self;
}

impl YesNo for bool {
    fn no() -> Self {
        false
    }

    fn yes() -> Self {
        true
    }
}

impl YesNo for serde_json::Value {
    fn no() -> Self {
        serde_json::Value::Bool(false)
    }

    fn yes() -> Self {
        serde_json::Value::Bool(true)
    }
}

/// The default option set: No, then Yes.
pub fn yes_no_options<T: YesNo>() -> Vec<RadioOption<T>> {
    vec![
        RadioOption::new("No", T::no()),
        RadioOption::new("Yes", T::yes()),
    ]
}

/// How options are arranged. Purely presentational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// One option per row.
    #[serde(alias = "table-row-group")]
    Stacked,
    /// All options on one row.
    #[default]
    #[serde(alias = "inline-block")]
    Inline,
}
