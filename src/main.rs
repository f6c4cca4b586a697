//! Frontera CLI
//!
//! # Usage
//!
//! ```bash
//! # Run from config
//! frontera run frontier.yaml
//!
//! # Run with overrides
//! frontera run frontier.yaml --threshold 50000 --no-chart
//!
//! # Analyze a CSV directly
//! frontera analyze strategies.csv --frontier-out frontier.csv --chart graph.svg
//!
//! # Validate config
//! frontera validate frontier.yaml --detailed
//!
//! # Write a starter config
//! frontera init --output frontier.yaml
//! ```

use clap::Parser;
use frontera::cli::{init_tracing, run_command, Cli, LogLevel};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(LogLevel::from_flags(cli.verbose, cli.quiet));

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
