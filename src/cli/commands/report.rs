//! Terminal rendering of frontier reports

use crate::cli::logging::{log, permits};
use crate::cli::LogLevel;
use crate::config::OutputFormat;
use crate::frontier::Strategy;
use crate::pipeline::FrontierReport;

const HEADERS: [&str; 4] = ["Label", "Benefit", "Cost", "ICER"];

/// Format frontier members as an aligned text table
///
/// Labels are left aligned, numbers right aligned.
pub fn format_frontier_table(frontier: &[Strategy], icer_digits: usize) -> String {
    let rows: Vec<[String; 4]> = frontier
        .iter()
        .map(|s| {
            [
                s.label.clone(),
                s.benefit.to_string(),
                s.cost.to_string(),
                s.icer_display(icer_digits),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&HEADERS.map(String::from), &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(rows.iter().map(|row| format_row(row, &widths)));
    lines.join("\n")
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let [label, rest @ ..] = cells;
    let mut line = format!("{label:<w$}", w = widths[0]);
    for (cell, &width) in rest.iter().zip(&widths[1..]) {
        line.push_str(&format!("  {cell:>width$}"));
    }
    line.trim_end().to_string()
}

/// Format the optimal-strategy line
pub fn format_optimal(report: &FrontierReport) -> String {
    format!(
        "Optimal strategy at threshold {}: {}",
        report.threshold, report.optimal.label
    )
}

/// Text report lines visible at `level`
///
/// Empty under `--quiet`.
pub fn text_report(report: &FrontierReport, icer_digits: usize, level: LogLevel) -> Vec<String> {
    let mut lines = Vec::new();
    if permits(level, LogLevel::Verbose) {
        lines.push(format!(
            "{} strategies read, {} on the frontier",
            report.original.len(),
            report.frontier.len()
        ));
    }
    if permits(level, LogLevel::Normal) {
        lines.push(format_frontier_table(report.frontier.strategies(), icer_digits));
        lines.push(String::new());
        lines.push(format_optimal(report));
        lines.extend(
            report
                .artifacts
                .iter()
                .map(|a| format!("  Wrote {}: {}", a.kind, a.path.display())),
        );
    }
    lines
}

/// Print a report in the requested format
///
/// JSON and YAML are printed even under `--quiet`, since they were asked for explicitly.
pub fn print_report(
    report: &FrontierReport,
    format: OutputFormat,
    icer_digits: usize,
    level: LogLevel,
) -> Result<(), String> {
    match format {
        OutputFormat::Text => {
            for line in text_report(report, icer_digits, level) {
                log(level, LogLevel::Normal, &line);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(report)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }
    Ok(())
}
