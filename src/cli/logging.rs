//! Logging utilities for CLI output

use tracing_subscriber::EnvFilter;

/// Log level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

impl LogLevel {
    /// Level selected by the global `--verbose`/`--quiet` flags
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }

    /// Default `tracing` filter when `RUST_LOG` is unset
    pub fn default_directive(self) -> &'static str {
        match self {
            LogLevel::Quiet => "error",
            LogLevel::Normal => "warn",
            LogLevel::Verbose => "frontera=debug",
        }
    }
}

/// Whether a message needing `required` is shown at `level`
pub fn permits(level: LogLevel, required: LogLevel) -> bool {
    level != LogLevel::Quiet && (level == required || required == LogLevel::Normal)
}

/// Log a message if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if permits(level, required) {
        println!("{msg}");
    }
}

/// Install the stderr diagnostics subscriber
///
/// `RUST_LOG` wins over the level's default directive. Calling this twice
/// leaves the first subscriber in place.
pub fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.default_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
