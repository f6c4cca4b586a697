//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, FrontierSpec, ValidateArgs};

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}

/// Format input and analysis settings as a string
pub fn format_analysis_info(spec: &FrontierSpec) -> String {
    [
        format!("  Input: {}", spec.input.path.display()),
        format!("  Header row: {}", spec.input.has_header),
        format!("  Threshold: {}", spec.analysis.threshold),
        format!("  ICER digits: {}", spec.analysis.icer_digits),
    ]
    .join("\n")
}

/// Format output settings as a string
pub fn format_output_info(spec: &FrontierSpec) -> String {
    let output = &spec.output;
    let mut lines = vec![
        format!(
            "  Original snapshot: {} ({})",
            on_off(output.original.enabled),
            output.original.path.display()
        ),
        format!(
            "  Frontier table: {} ({})",
            on_off(output.frontier.enabled),
            output.frontier.path.display()
        ),
        format!(
            "  Chart: {} ({})",
            on_off(output.chart.enabled),
            output.chart.path.display()
        ),
    ];
    if output.chart.enabled {
        lines.push(format!("    Title: {}", output.chart.title));
        lines.push(format!("    Cost on x axis: {}", output.chart.invert_axes));
        lines.push(format!("    Mark optimal: {}", output.chart.mark_optimal));
        lines.push(format!("    ICER legend: {}", output.chart.list_frontier));
    }
    lines.join("\n")
}

/// Print detailed configuration summary
pub fn print_detailed_summary(spec: &FrontierSpec) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_analysis_info(spec));
    println!();
    println!("{}", format_output_info(spec));
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed {
        print_detailed_summary(&spec);
    }

    Ok(())
}
