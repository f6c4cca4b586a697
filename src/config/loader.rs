//! Frontier spec loading

use crate::config::schema::FrontierSpec;
use crate::config::validate::validate_config;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Parse a YAML frontier spec without validating it
///
/// Use this when overrides are applied before validation.
pub fn parse_config_unchecked(yaml: &str) -> Result<FrontierSpec> {
    serde_yaml::from_str(yaml)
        .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))
}

/// Parse and validate a YAML frontier spec
pub fn parse_config(yaml: &str) -> Result<FrontierSpec> {
    let spec = parse_config_unchecked(yaml)?;

    validate_config(&spec).map_err(|e| Error::ConfigError(format!("Invalid config: {e}")))?;

    Ok(spec)
}

/// Read a frontier spec from a YAML file without validating it
pub fn read_config<P: AsRef<Path>>(config_path: P) -> Result<FrontierSpec> {
    let yaml_content = fs::read_to_string(config_path.as_ref()).map_err(|e| {
        Error::ConfigError(format!(
            "Failed to read config file {}: {}",
            config_path.as_ref().display(),
            e
        ))
    })?;

    let spec = parse_config_unchecked(&yaml_content)?;
    tracing::debug!(config = %config_path.as_ref().display(), "read frontier spec");
    Ok(spec)
}

/// Load and validate a frontier spec from a YAML file
///
/// Relative `input.path` values are taken as written, i.e. relative to the
/// working directory, not to the config file.
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<FrontierSpec> {
    let spec = read_config(config_path)?;
    validate_config(&spec).map_err(|e| Error::ConfigError(format!("Invalid config: {e}")))?;
    Ok(spec)
}
