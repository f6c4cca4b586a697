//! CLI command implementations

mod analyze;
mod init;
mod report;
mod run;
mod validate;


use crate::cli::LogLevel;
use crate::config::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Run(args) => run::run_run(args, log_level),
        Command::Analyze(args) => analyze::run_analyze(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Init(args) => init::run_init(args, log_level),
    }
}
