//! Dominance filter
//!
//! Removes strategies that are weakly dominated by their predecessor in a
//! `(benefit, cost)`-ascending ordering. Because the ordering is
//! benefit-ascending, the rule only fires on benefit ties where the later
//! strategy is strictly more expensive.

use super::strategy::Strategy;
use std::cmp::Ordering;

/// Sort strategies ascending by benefit, then cost (stable)
pub fn sort_strategies(strategies: &mut [Strategy]) {
    strategies.sort_by(|a, b| {
        a.benefit
            .partial_cmp(&b.benefit)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.cost.partial_cmp(&b.cost).unwrap_or(Ordering::Equal))
    });
}

/// `later` is dominated when `earlier` offers at least its benefit for less cost
fn is_weakly_dominated(earlier: &Strategy, later: &Strategy) -> bool {
    earlier.benefit >= later.benefit && earlier.cost < later.cost
}

/// Drop weakly dominated strategies from a sorted sequence
///
/// Each candidate is compared with the last strategy kept so far, which is
/// the neighbour it would have after every earlier deletion. A single pass
/// therefore yields the same sequence as rescanning from the start after
/// each deletion.
pub fn drop_dominated(sorted: Vec<Strategy>) -> Vec<Strategy> {
    let mut kept: Vec<Strategy> = Vec::with_capacity(sorted.len());

    for candidate in sorted {
        if let Some(previous) = kept.last() {
            if is_weakly_dominated(previous, &candidate) {
                tracing::debug!(
                    dropped = %candidate.label,
                    by = %previous.label,
                    benefit = candidate.benefit,
                    cost = candidate.cost,
                    "dropping weakly dominated strategy"
                );
                continue;
            }
        }
        kept.push(candidate);
    }

    kept
}
