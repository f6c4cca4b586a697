//! CLI module for frontera
//!
//! Command handlers and terminal output helpers.

mod commands;
mod logging;

pub use commands::run_command;
pub use logging::{init_tracing, LogLevel};

// Re-export Cli from config for convenience
pub use crate::config::Cli;
