//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::{validate_config, MAX_ICER_DIGITS};
use crate::config::schema::*;
use proptest::prelude::*;

fn arb_valid_spec() -> impl Strategy<Value = FrontierSpec> {
    (
        -1e7f64..1e7,           // threshold
        0usize..=MAX_ICER_DIGITS, // icer_digits
        any::<bool>(),          // original enabled
        any::<bool>(),          // chart enabled
    )
        .prop_map(|(threshold, icer_digits, original, chart)| {
            let mut spec = FrontierSpec::for_input("strategies.csv");
            spec.analysis = AnalysisSpec { threshold, icer_digits };
            spec.output.original.enabled = original;
            spec.output.chart.enabled = chart;
            spec
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_spec_passes(spec in arb_valid_spec()) {
        prop_assert!(validate_config(&spec).is_ok());
    }

    #[test]
    fn prop_excess_digits_rejected(
        spec in arb_valid_spec(),
        digits in (MAX_ICER_DIGITS + 1)..1000
    ) {
        let mut spec = spec;
        spec.analysis.icer_digits = digits;
        prop_assert_eq!(
            validate_config(&spec).unwrap_err(),
            ValidationError::InvalidIcerDigits(digits)
        );
    }

    #[test]
    fn prop_valid_spec_survives_yaml(spec in arb_valid_spec()) {
        let yaml = serde_yaml::to_string(&spec).unwrap();
        let back: FrontierSpec = serde_yaml::from_str(&yaml).unwrap();
        prop_assert!(validate_config(&back).is_ok());
        prop_assert_eq!(back.analysis.icer_digits, spec.analysis.icer_digits);
    }
}
