//! Validation error types

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Input path is empty (set input.path)")]
    EmptyInputPath,

    #[error("Invalid threshold: {0} (must be a finite number)")]
    InvalidThreshold(f64),

    #[error("Invalid ICER digits: {0} (must be <= {max})", max = super::MAX_ICER_DIGITS)]
    InvalidIcerDigits(usize),

    #[error("Output '{0}' is enabled but has an empty path")]
    EmptyOutputPath(&'static str),

    #[error("Chart title cannot be empty when the chart is enabled")]
    EmptyChartTitle,
}
