//! Frontier builder
//!
//! Computes ICERs between adjacent candidates and removes extendedly
//! dominated strategies until the ICER sequence is non-decreasing.

use super::dominance::{drop_dominated, sort_strategies};
use super::error::{FrontierError, Result};
use super::strategy::Strategy;
use serde::Serialize;

/// ICER moving from `previous` to `next`
///
/// Fails on a benefit tie instead of producing an infinite or NaN ratio.
pub fn icer_between(previous: &Strategy, next: &Strategy) -> Result<f64> {
    let delta_benefit = next.benefit - previous.benefit;
    if delta_benefit == 0.0 {
        return Err(FrontierError::DegenerateBenefitTie {
            earlier: previous.label.clone(),
            later: next.label.clone(),
            benefit: next.benefit,
        });
    }
    Ok((next.cost - previous.cost) / delta_benefit)
}

/// ICERs for every adjacent pair; `n` strategies give `n - 1` ratios
pub fn compute_icers(strategies: &[Strategy]) -> Result<Vec<f64>> {
    strategies
        .windows(2)
        .map(|pair| icer_between(&pair[0], &pair[1]))
        .collect()
}

fn ensure_benefit_ascending(strategies: &[Strategy]) -> Result<()> {
    for pair in strategies.windows(2) {
        let (earlier, later) = (&pair[0], &pair[1]);
        if later.benefit == earlier.benefit {
            return Err(FrontierError::DegenerateBenefitTie {
                earlier: earlier.label.clone(),
                later: later.label.clone(),
                benefit: later.benefit,
            });
        }
        if later.benefit < earlier.benefit {
            return Err(FrontierError::UnsortedInput {
                earlier: earlier.label.clone(),
                earlier_benefit: earlier.benefit,
                later: later.label.clone(),
                later_benefit: later.benefit,
            });
        }
    }
    Ok(())
}

/// Remove extendedly dominated strategies
///
/// Input must be strictly benefit-ascending (the output of
/// [`drop_dominated`]). Whenever `ICER[k] > ICER[k + 1]` the strategy shared
/// by both ratios lies above the chord of its neighbours and is removed.
/// The stack holds a convex chain: a candidate pops the top while the ratio
/// into the top exceeds the ratio from the top to the candidate. Equal
/// ratios are kept.
pub fn drop_extendedly_dominated(candidates: Vec<Strategy>) -> Result<Vec<Strategy>> {
    ensure_benefit_ascending(&candidates)?;

    let mut chain: Vec<Strategy> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        while let [.., before, top] = chain.as_slice() {
            let incoming = icer_between(before, top)?;
            let outgoing = icer_between(top, &candidate)?;
            if incoming <= outgoing {
                break;
            }
            tracing::debug!(
                dropped = %top.label,
                incoming,
                outgoing,
                "dropping extendedly dominated strategy"
            );
            chain.pop();
        }
        chain.push(candidate);
    }

    Ok(chain)
}

/// Attach final ICERs; the baseline gets none
fn annotate(chain: Vec<Strategy>) -> Result<Vec<Strategy>> {
    let icers = compute_icers(&chain)?;
    Ok(std::iter::once(None)
        .chain(icers.into_iter().map(Some))
        .zip(chain)
        .map(|(icer, mut strategy)| {
            strategy.icer = icer;
            strategy
        })
        .collect())
}

/// A finalized efficiency frontier
///
/// Members are strictly increasing in benefit with non-decreasing ICERs.
/// The first member is the baseline and carries no ICER.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Frontier {
    strategies: Vec<Strategy>,
}

impl Frontier {
    /// Build a frontier from raw strategies in any order
    ///
    /// Any ICER already present on the input is ignored and recomputed.
    pub fn build(strategies: Vec<Strategy>) -> Result<Self> {
        if strategies.is_empty() {
            return Err(FrontierError::EmptyInput);
        }
        for strategy in &strategies {
            strategy.ensure_finite()?;
        }

        let total = strategies.len();
        let mut sorted = strategies;
        sort_strategies(&mut sorted);

        let undominated = drop_dominated(sorted);
        let chain = drop_extendedly_dominated(undominated)?;
        let strategies = annotate(chain)?;

        tracing::debug!(
            input = total,
            frontier = strategies.len(),
            "efficiency frontier built"
        );

        Ok(Self { strategies })
    }

    /// Frontier members, lowest benefit first
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Iterate over frontier members
    pub fn iter(&self) -> std::slice::Iter<'_, Strategy> {
        self.strategies.iter()
    }

    /// Number of frontier members
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Always false for a built frontier
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Lowest-benefit member
    pub fn baseline(&self) -> &Strategy {
        &self.strategies[0]
    }

    /// ICER column, `None` for the baseline
    pub fn icers(&self) -> Vec<Option<f64>> {
        self.strategies.iter().map(|s| s.icer).collect()
    }

    /// Consume the frontier, returning its members
    pub fn into_strategies(self) -> Vec<Strategy> {
        self.strategies
    }
}

impl<'a> IntoIterator for &'a Frontier {
    type Item = &'a Strategy;
    type IntoIter = std::slice::Iter<'a, Strategy>;

    fn into_iter(self) -> Self::IntoIter {
        self.strategies.iter()
    }
}
