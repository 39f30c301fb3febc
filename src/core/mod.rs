//! Core types: the defaults selector and error handling.

pub mod error;
pub mod selector;

pub use error::{Error, Result};
pub use selector::DefaultsSelector;
