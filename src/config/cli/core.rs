//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use super::init::InitArgs;
use super::types::OutputFormat;
use crate::config::schema::FrontierSpec;

/// Frontera: cost-effectiveness efficiency frontiers
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "frontera")]
#[command(version)]
#[command(
    about = "Efficiency frontiers with dominance pruning, ICERs and willingness-to-pay selection"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run a frontier analysis from YAML configuration
    Run(RunArgs),

    /// Analyze a strategy CSV directly
    Analyze(AnalyzeArgs),

    /// Validate a configuration file without running it
    Validate(ValidateArgs),

    /// Write a starter configuration
    Init(InitArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override willingness-to-pay threshold
    #[arg(short, long, allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// Override ICER display precision
    #[arg(long)]
    pub icer_digits: Option<usize>,

    /// Skip chart rendering
    #[arg(long)]
    pub no_chart: bool,

    /// Place relative output paths under this directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the analyze command
///
/// Only the artifacts named on the command line are written.
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct AnalyzeArgs {
    /// CSV file with label, benefit and cost columns
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// First row is data, not a header
    #[arg(long)]
    pub no_header: bool,

    /// Willingness-to-pay threshold
    #[arg(short, long, allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// ICER display precision
    #[arg(long)]
    pub icer_digits: Option<usize>,

    /// Write the frontier table here
    #[arg(long, value_name = "PATH")]
    pub frontier_out: Option<PathBuf>,

    /// Write a snapshot of the input here
    #[arg(long, value_name = "PATH")]
    pub original_out: Option<PathBuf>,

    /// Render the SVG chart here
    #[arg(long, value_name = "PATH")]
    pub chart: Option<PathBuf>,

    /// Chart title
    #[arg(long, default_value = "Efficiency Frontier")]
    pub title: String,

    /// Put benefit on the x axis
    #[arg(long)]
    pub no_invert: bool,

    /// Do not highlight the optimal strategy
    #[arg(long)]
    pub no_optimal: bool,

    /// Do not draw the ICER legend box
    #[arg(long)]
    pub no_legend: bool,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

impl AnalyzeArgs {
    /// Spec equivalent to these arguments
    pub fn to_spec(&self) -> FrontierSpec {
        let mut spec = FrontierSpec::for_input(&self.data);
        spec.input.has_header = !self.no_header;
        if let Some(threshold) = self.threshold {
            spec.analysis.threshold = threshold;
        }
        if let Some(digits) = self.icer_digits {
            spec.analysis.icer_digits = digits;
        }

        let output = &mut spec.output;
        output.original.enabled = self.original_out.is_some();
        if let Some(path) = &self.original_out {
            output.original.path = path.clone();
        }
        output.frontier.enabled = self.frontier_out.is_some();
        if let Some(path) = &self.frontier_out {
            output.frontier.path = path.clone();
        }
        output.chart.enabled = self.chart.is_some();
        if let Some(path) = &self.chart {
            output.chart.path = path.clone();
        }
        output.chart.title = self.title.clone();
        output.chart.invert_axes = !self.no_invert;
        output.chart.mark_optimal = !self.no_optimal;
        output.chart.list_frontier = !self.no_legend;
        spec
    }
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show detailed validation report
    #[arg(short, long)]
    pub detailed: bool,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a FrontierSpec
pub fn apply_overrides(spec: &mut FrontierSpec, args: &RunArgs) {
    if let Some(threshold) = args.threshold {
        spec.analysis.threshold = threshold;
    }
    if let Some(digits) = args.icer_digits {
        spec.analysis.icer_digits = digits;
    }
    if args.no_chart {
        spec.output.chart.enabled = false;
    }
    if let Some(dir) = &args.output_dir {
        let output = &mut spec.output;
        rebase(&mut output.original.path, dir);
        rebase(&mut output.frontier.path, dir);
        rebase(&mut output.chart.path, dir);
    }
}

/// Absolute paths are kept as they are
fn rebase(path: &mut PathBuf, dir: &Path) {
    if path.is_relative() && !path.as_os_str().is_empty() {
        *path = dir.join(&*path);
    }
}
