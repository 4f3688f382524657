//! Interactive form controls.

pub mod radio;
