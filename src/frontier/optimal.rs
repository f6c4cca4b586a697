//! Willingness-to-pay selection on a finalized frontier

use super::builder::Frontier;
use super::strategy::Strategy;

/// Highest-benefit strategy whose ICER is strictly below `threshold`
///
/// Scans from the highest-benefit member down. Since frontier ICERs are
/// non-decreasing, the members under the threshold form a prefix and the
/// first hit is its boundary. The baseline has no ICER and is the fallback
/// when nothing qualifies. Returns `None` only for an empty slice.
pub fn select_optimal(frontier: &[Strategy], threshold: f64) -> Option<Strategy> {
    let baseline = frontier.first()?;
    let chosen = frontier
        .iter()
        .skip(1)
        .rev()
        .find(|s| s.icer.is_some_and(|icer| icer < threshold))
        .unwrap_or(baseline);
    Some(chosen.clone())
}

impl Frontier {
    /// Optimal strategy for a willingness-to-pay `threshold` (detached copy)
    pub fn optimal(&self, threshold: f64) -> Strategy {
        select_optimal(self.strategies(), threshold).unwrap_or_else(|| self.baseline().clone())
    }
}
