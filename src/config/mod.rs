//! Frontier run configuration
//!
//! YAML schema, loading, validation and command-line parsing.

pub mod cli;
mod loader;
pub mod schema;
pub mod validate;

pub use cli::{
    apply_overrides, parse_args, AnalyzeArgs, Cli, Command, InitArgs, InitTemplate,
    OutputFormat, RunArgs, ValidateArgs,
};
pub use loader::{load_config, parse_config, parse_config_unchecked, read_config};
pub use schema::{
    AnalysisSpec, ChartOutput, FrontierOutput, FrontierSpec, InputSpec, OriginalOutput,
    OutputSpec,
};
pub use validate::{validate_config, ValidationError, MAX_ICER_DIGITS};
