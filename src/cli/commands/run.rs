//! Run command implementation

use super::report::print_report;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{apply_overrides, read_config, validate_config, RunArgs};
use crate::pipeline::run_from_spec;

pub fn run_run(args: RunArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Verbose,
        &format!("Loading config: {}", args.config.display()),
    );

    // Validated once, after overrides: --no-chart can make a chart-less config valid.
    let mut spec = read_config(&args.config).map_err(|e| format!("Config error: {e}"))?;
    apply_overrides(&mut spec, &args);
    validate_config(&spec).map_err(|e| format!("Validation failed: {e}"))?;

    log(
        level,
        LogLevel::Verbose,
        &format!("Reading strategies: {}", spec.input.path.display()),
    );
    let report = run_from_spec(&spec).map_err(|e| format!("Run failed: {e}"))?;

    print_report(&report, args.format, spec.analysis.icer_digits, level)
}
