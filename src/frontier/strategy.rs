//! Strategy record

use super::error::{FrontierError, Result};
use serde::{Deserialize, Serialize};

/// Display marker for the baseline strategy's ICER
pub const NOT_APPLICABLE: &str = "N/A";

/// Default willingness-to-pay threshold (cost per unit of benefit)
pub const DEFAULT_THRESHOLD: f64 = 100_000.0;

/// A competing strategy with its benefit and cost
///
/// `icer` is `None` for raw input and for the baseline (lowest-benefit)
/// member of a finalized frontier; every other frontier member carries the
/// ratio against its predecessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    /// Opaque identifier, not required to be unique
    pub label: String,
    /// Effectiveness measure (higher is better)
    pub benefit: f64,
    /// Resource measure (lower is better)
    pub cost: f64,
    /// Incremental cost-effectiveness ratio against the previous frontier member
    #[serde(default)]
    pub icer: Option<f64>,
}

impl Strategy {
    /// Create a raw strategy without an ICER
    pub fn new(label: impl Into<String>, benefit: f64, cost: f64) -> Self {
        Self {
            label: label.into(),
            benefit,
            cost,
            icer: None,
        }
    }

    /// Set the ICER (builder style)
    pub fn with_icer(mut self, icer: f64) -> Self {
        self.icer = Some(icer);
        self
    }

    /// Reject NaN and infinite measures
    pub fn ensure_finite(&self) -> Result<()> {
        for (field, value) in [("benefit", self.benefit), ("cost", self.cost)] {
            if !value.is_finite() {
                return Err(FrontierError::NonFiniteValue {
                    label: self.label.clone(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }

    /// ICER rounded to `digits` decimals, or [`NOT_APPLICABLE`]
    pub fn icer_display(&self, digits: usize) -> String {
        match self.icer {
            Some(icer) => format!("{icer:.digits$}"),
            None => NOT_APPLICABLE.to_string(),
        }
    }

    /// ICER rounded to `digits` decimals and printed in shortest form
    ///
    /// `5.0`, `8.33`, `25.0`: trailing zeros dropped but at least one
    /// decimal kept. Used for chart legends.
    pub fn icer_rounded(&self, digits: usize) -> String {
        match self.icer {
            Some(icer) => {
                let scale = 10f64.powi(digits.min(i32::MAX as usize) as i32);
                let rounded = (icer * scale).round() / scale;
                let rounded = if rounded.is_finite() { rounded } else { icer };
                format!("{rounded:?}")
            }
            None => NOT_APPLICABLE.to_string(),
        }
    }
}
