//! Analyze command implementation

use super::report::print_report;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{validate_config, AnalyzeArgs};
use crate::pipeline::run_from_spec;

pub fn run_analyze(args: AnalyzeArgs, level: LogLevel) -> Result<(), String> {
    let spec = args.to_spec();
    validate_config(&spec).map_err(|e| format!("Invalid arguments: {e}"))?;

    log(
        level,
        LogLevel::Verbose,
        &format!("Analyzing: {}", spec.input.path.display()),
    );
    let report = run_from_spec(&spec).map_err(|e| format!("Analysis failed: {e}"))?;

    print_report(&report, args.format, spec.analysis.icer_digits, level)
}
