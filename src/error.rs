//! Crate-level error type

use crate::frontier::FrontierError;
use thiserror::Error;

/// Errors raised by frontera's I/O, configuration and rendering layers
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed row at line {line}: {message}")]
    MalformedRow { line: u64, message: String },

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Chart rendering failed: {0}")]
    Chart(String),

    #[error(transparent)]
    Frontier(#[from] FrontierError),
}

/// Result type for frontera operations
pub type Result<T> = std::result::Result<T, Error>;
