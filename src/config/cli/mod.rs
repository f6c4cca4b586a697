//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! frontera run frontier.yaml
//! frontera run frontier.yaml --threshold 50000 --output-dir ./out
//! frontera analyze strategies.csv --frontier-out frontier.csv --chart graph.svg
//! frontera validate frontier.yaml
//! frontera init --output frontier.yaml
//! ```

mod core;
mod init;
mod types;

#[cfg(test)]
mod property_tests;

pub use core::{apply_overrides, parse_args, AnalyzeArgs, Cli, Command, RunArgs, ValidateArgs};
pub use init::{InitArgs, InitTemplate};
pub use types::OutputFormat;
