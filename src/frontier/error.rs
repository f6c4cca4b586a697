//! Frontier error types

use thiserror::Error;

/// Errors raised while building an efficiency frontier
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrontierError {
    #[error("No strategies supplied: an efficiency frontier needs at least one strategy")]
    EmptyInput,

    #[error("Strategy '{label}' has a non-finite {field}: {value}")]
    NonFiniteValue {
        label: String,
        field: &'static str,
        value: f64,
    },

    #[error(
        "Strategies '{earlier}' and '{later}' share benefit {benefit}: \
         ICER is undefined (run the dominance filter before computing ICERs)"
    )]
    DegenerateBenefitTie {
        earlier: String,
        later: String,
        benefit: f64,
    },

    #[error(
        "Strategies are not sorted by benefit: '{later}' ({later_benefit}) \
         follows '{earlier}' ({earlier_benefit})"
    )]
    UnsortedInput {
        earlier: String,
        earlier_benefit: f64,
        later: String,
        later_benefit: f64,
    },
}

/// Result type for frontier operations
pub type Result<T> = std::result::Result<T, FrontierError>;
