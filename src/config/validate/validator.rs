//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::FrontierSpec;
use std::path::Path;

/// Largest accepted `analysis.icer_digits`
pub const MAX_ICER_DIGITS: usize = 12;

/// Validate a frontier run specification
///
/// Checks:
/// - Input path is set
/// - Threshold is finite
/// - ICER precision is in range
/// - Enabled outputs have a destination
pub fn validate_config(spec: &FrontierSpec) -> Result<(), ValidationError> {
    if is_empty(&spec.input.path) {
        return Err(ValidationError::EmptyInputPath);
    }

    if !spec.analysis.threshold.is_finite() {
        return Err(ValidationError::InvalidThreshold(spec.analysis.threshold));
    }

    if spec.analysis.icer_digits > MAX_ICER_DIGITS {
        return Err(ValidationError::InvalidIcerDigits(spec.analysis.icer_digits));
    }

    let output = &spec.output;
    if output.original.enabled && is_empty(&output.original.path) {
        return Err(ValidationError::EmptyOutputPath("original"));
    }
    if output.frontier.enabled && is_empty(&output.frontier.path) {
        return Err(ValidationError::EmptyOutputPath("frontier"));
    }
    if output.chart.enabled {
        if is_empty(&output.chart.path) {
            return Err(ValidationError::EmptyOutputPath("chart"));
        }
        if output.chart.title.trim().is_empty() {
            return Err(ValidationError::EmptyChartTitle);
        }
    }

    Ok(())
}

fn is_empty(path: &Path) -> bool {
    path.as_os_str().is_empty()
}
