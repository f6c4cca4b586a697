//! Configuration validation
//!
//! Validates frontier run specifications before any file is read.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::ValidationError;
pub use validator::{validate_config, MAX_ICER_DIGITS};
