//! Property-based tests for frontier invariants

use super::{compute_icers, sort_strategies, Frontier, Strategy as Candidate};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Distinct integer-valued points so no two strategies coincide exactly
fn strategies_strategy() -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::btree_set((0i32..200, -500i32..5_000), 1..40).prop_map(
        |points: BTreeSet<(i32, i32)>| {
            points
                .into_iter()
                .enumerate()
                .map(|(i, (benefit, cost))| {
                    Candidate::new(format!("s{i}"), f64::from(benefit), f64::from(cost))
                })
                .collect::<Vec<_>>()
        },
    )
    .prop_shuffle()
}

/// Rescan-from-the-top pruning, one deletion per scan
fn rescan_reference(mut data: Vec<Candidate>) -> Vec<Candidate> {
    sort_strategies(&mut data);

    'dominance: loop {
        for i in 0..data.len().saturating_sub(1) {
            if data[i].benefit >= data[i + 1].benefit && data[i].cost < data[i + 1].cost {
                data.remove(i + 1);
                continue 'dominance;
            }
        }
        break;
    }

    'extended: loop {
        let icers = compute_icers(&data).expect("distinct benefits");
        for k in 0..icers.len().saturating_sub(1) {
            if icers[k] > icers[k + 1] {
                data.remove(k + 1);
                continue 'extended;
            }
        }
        break;
    }

    data
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_frontier_benefit_strictly_increasing(data in strategies_strategy()) {
        let frontier = Frontier::build(data).unwrap();
        for pair in frontier.strategies().windows(2) {
            prop_assert!(pair[0].benefit < pair[1].benefit);
        }
    }

    #[test]
    fn prop_frontier_icers_non_decreasing(data in strategies_strategy()) {
        let frontier = Frontier::build(data).unwrap();
        prop_assert!(frontier.baseline().icer.is_none());
        let icers: Vec<f64> = frontier.iter().skip(1).map(|s| s.icer.unwrap()).collect();
        for pair in icers.windows(2) {
            prop_assert!(pair[0] <= pair[1], "ICERs out of order: {:?}", pair);
        }
    }

    #[test]
    fn prop_frontier_has_no_weakly_dominated_pair(data in strategies_strategy()) {
        let frontier = Frontier::build(data).unwrap();
        for (i, a) in frontier.iter().enumerate() {
            for b in frontier.iter().skip(i + 1) {
                prop_assert!(!(a.benefit >= b.benefit && a.cost < b.cost));
            }
        }
    }

    #[test]
    fn prop_stack_pruning_matches_rescan(data in strategies_strategy()) {
        let expected: Vec<(String, f64, f64)> = rescan_reference(data.clone())
            .into_iter()
            .map(|s| (s.label, s.benefit, s.cost))
            .collect();
        let actual: Vec<(String, f64, f64)> = Frontier::build(data)
            .unwrap()
            .into_strategies()
            .into_iter()
            .map(|s| (s.label, s.benefit, s.cost))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_rebuild_is_idempotent(data in strategies_strategy()) {
        let once = Frontier::build(data).unwrap();
        let twice = Frontier::build(once.clone().into_strategies()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_optimal_sits_on_threshold_boundary(
        data in strategies_strategy(),
        threshold in -100.0f64..1_000.0,
    ) {
        let frontier = Frontier::build(data).unwrap();
        let chosen = frontier.optimal(threshold);
        let position = frontier
            .iter()
            .position(|s| s.label == chosen.label)
            .unwrap();

        if position > 0 {
            prop_assert!(chosen.icer.unwrap() < threshold);
        }
        if let Some(next) = frontier.strategies().get(position + 1) {
            prop_assert!(next.icer.unwrap() >= threshold);
        }
    }
}
