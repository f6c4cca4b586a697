//! Property-based tests for CLI argument parsing

use super::*;
use proptest::prelude::*;

// Strategy for valid config paths
fn config_path_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_-]{0,20}\\.(yaml|yml)"
}

// Strategy for valid data paths
fn data_path_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_/-]{0,30}\\.csv"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_run_command_parses(config in config_path_strategy()) {
        let cli = parse_args(["frontera", "run", &config]).unwrap();
        match cli.command {
            Command::Run(args) => {
                prop_assert_eq!(args.config.to_str().unwrap(), &config);
            }
            _ => prop_assert!(false, "Expected Run command"),
        }
    }

    #[test]
    fn prop_analyze_command_parses(data in data_path_strategy()) {
        let cli = parse_args(["frontera", "analyze", &data]).unwrap();
        match cli.command {
            Command::Analyze(args) => {
                let spec = args.to_spec();
                prop_assert_eq!(spec.input.path.to_str().unwrap(), &data);
            }
            _ => prop_assert!(false, "Expected Analyze command"),
        }
    }

    #[test]
    fn prop_threshold_override(
        config in config_path_strategy(),
        threshold in -1e9f64..1e9
    ) {
        let threshold_str = threshold.to_string();
        let cli = parse_args([
            "frontera", "run", &config,
            "--threshold", &threshold_str,
        ]).unwrap();
        match cli.command {
            Command::Run(args) => {
                prop_assert_eq!(args.threshold, Some(threshold));
            }
            _ => prop_assert!(false, "Expected Run command"),
        }
    }

    #[test]
    fn prop_icer_digits_override(
        config in config_path_strategy(),
        digits in 0usize..64
    ) {
        let digits_str = digits.to_string();
        let cli = parse_args([
            "frontera", "run", &config,
            "--icer-digits", &digits_str,
        ]).unwrap();
        match cli.command {
            Command::Run(args) => {
                prop_assert_eq!(args.icer_digits, Some(digits));
            }
            _ => prop_assert!(false, "Expected Run command"),
        }
    }

    #[test]
    fn prop_output_format_case_insensitive(
        format in prop::sample::select(vec!["text", "TEXT", "Text", "json", "JSON", "Json", "yaml", "YAML", "Yaml"])
    ) {
        let result = format.parse::<OutputFormat>();
        prop_assert!(result.is_ok());
    }

    #[test]
    fn prop_output_format_display_roundtrip(
        format in prop::sample::select(vec![OutputFormat::Text, OutputFormat::Json, OutputFormat::Yaml])
    ) {
        prop_assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
    }
}
