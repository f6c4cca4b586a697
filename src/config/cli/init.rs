//! Init command types

use clap::Parser;
use std::path::PathBuf;

/// Arguments for the init command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InitArgs {
    /// Template to use for initialization
    #[arg(short, long, default_value = "minimal")]
    pub template: InitTemplate,

    /// Output path (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Strategy CSV the config should read
    #[arg(long, default_value = "strategies.csv")]
    pub input: PathBuf,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}

/// Init template type
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InitTemplate {
    /// Input path only, everything else defaulted
    #[default]
    Minimal,
    /// Every section written out
    Full,
}

impl std::str::FromStr for InitTemplate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimal" | "min" => Ok(InitTemplate::Minimal),
            "full" | "complete" => Ok(InitTemplate::Full),
            _ => Err(format!(
                "Unknown template: {s}. Valid templates: minimal, full"
            )),
        }
    }
}

impl std::fmt::Display for InitTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitTemplate::Minimal => write!(f, "minimal"),
            InitTemplate::Full => write!(f, "full"),
        }
    }
}
