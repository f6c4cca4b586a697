//! Init command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{FrontierSpec, InitArgs, InitTemplate};
use std::path::Path;

const HEADER: &str = "# Frontera efficiency frontier configuration\n";

/// Render the starter configuration for a template
pub fn generate_config(template: InitTemplate, input: &Path) -> Result<String, String> {
    match template {
        InitTemplate::Minimal => {
            let input = serde_yaml::to_string(&input.display().to_string())
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            Ok(format!("{HEADER}input:\n  path: {input}"))
        }
        InitTemplate::Full => {
            let yaml = serde_yaml::to_string(&FrontierSpec::for_input(input))
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            Ok(format!("{HEADER}{yaml}"))
        }
    }
}

pub fn run_init(args: InitArgs, level: LogLevel) -> Result<(), String> {
    let yaml = generate_config(args.template, &args.input)?;

    match &args.output {
        Some(path) => {
            if path.exists() && !args.force {
                return Err(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ));
            }
            std::fs::write(path, &yaml)
                .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
            log(
                level,
                LogLevel::Normal,
                &format!("Created {} ({} template)", path.display(), args.template),
            );
        }
        None => print!("{yaml}"),
    }

    Ok(())
}
