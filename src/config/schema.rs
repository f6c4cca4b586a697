//! YAML schema for frontier runs
//!
//! Every field has a default matching a plain `calculate_frontier` call, so
//! a config only needs `input.path`.

use crate::frontier::DEFAULT_THRESHOLD;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Deserialize a bool from either a YAML boolean (`true`) or a quoted string (`"true"`).
fn deserialize_bool_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Str(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::Str(s) => match s.to_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected 'true' or 'false', got '{other}'"
            ))),
        },
    }
}

fn default_true() -> bool {
    true
}

/// Complete frontier run specification
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrontierSpec {
    /// Strategy table to read
    #[serde(default)]
    pub input: InputSpec,

    /// Threshold and display precision
    #[serde(default)]
    pub analysis: AnalysisSpec,

    /// Artifacts to write
    #[serde(default)]
    pub output: OutputSpec,
}

/// Strategy table location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSpec {
    /// CSV file with `label,benefit,cost` rows
    #[serde(default)]
    pub path: PathBuf,

    /// Skip the first row
    #[serde(default = "default_true", deserialize_with = "deserialize_bool_lenient")]
    pub has_header: bool,
}

impl Default for InputSpec {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            has_header: true,
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_icer_digits() -> usize {
    2
}

/// Analysis parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSpec {
    /// Willingness-to-pay threshold (cost per unit of benefit)
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Decimal places for displayed ICERs
    #[serde(default = "default_icer_digits")]
    pub icer_digits: usize,
}

impl Default for AnalysisSpec {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            icer_digits: default_icer_digits(),
        }
    }
}

/// Output artifacts
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputSpec {
    /// Snapshot of the input as read
    #[serde(default)]
    pub original: OriginalOutput,

    /// Frontier table with ICERs
    #[serde(default)]
    pub frontier: FrontierOutput,

    /// Frontier chart
    #[serde(default)]
    pub chart: ChartOutput,
}

fn default_original_path() -> PathBuf {
    PathBuf::from("original_data.csv")
}

/// Original-data snapshot (off by default)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginalOutput {
    #[serde(default, deserialize_with = "deserialize_bool_lenient")]
    pub enabled: bool,

    #[serde(default = "default_original_path")]
    pub path: PathBuf,
}

impl Default for OriginalOutput {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_original_path(),
        }
    }
}

fn default_frontier_path() -> PathBuf {
    PathBuf::from("frontier_strategies.csv")
}

/// Frontier table (on by default)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontierOutput {
    #[serde(default = "default_true", deserialize_with = "deserialize_bool_lenient")]
    pub enabled: bool,

    #[serde(default = "default_frontier_path")]
    pub path: PathBuf,
}

impl Default for FrontierOutput {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_frontier_path(),
        }
    }
}

fn default_chart_path() -> PathBuf {
    PathBuf::from("graph.svg")
}

fn default_title() -> String {
    "Efficiency Frontier".to_string()
}

/// Frontier chart (on by default)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOutput {
    #[serde(default = "default_true", deserialize_with = "deserialize_bool_lenient")]
    pub enabled: bool,

    #[serde(default = "default_chart_path")]
    pub path: PathBuf,

    #[serde(default = "default_title")]
    pub title: String,

    /// Cost on the x axis, benefit on the y axis
    #[serde(default = "default_true", deserialize_with = "deserialize_bool_lenient")]
    pub invert_axes: bool,

    /// Highlight the optimal strategy
    #[serde(default = "default_true", deserialize_with = "deserialize_bool_lenient")]
    pub mark_optimal: bool,

    /// Draw the legend box listing frontier ICERs
    #[serde(default = "default_true", deserialize_with = "deserialize_bool_lenient")]
    pub list_frontier: bool,
}

impl Default for ChartOutput {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_chart_path(),
            title: default_title(),
            invert_axes: true,
            mark_optimal: true,
            list_frontier: true,
        }
    }
}

impl FrontierSpec {
    /// Spec reading `path` with every other setting at its default
    pub fn for_input(path: impl Into<PathBuf>) -> Self {
        Self {
            input: InputSpec {
                path: path.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let spec: FrontierSpec = serde_yaml::from_str("input:\n  path: data.csv\n").unwrap();
        assert_eq!(spec.input.path, PathBuf::from("data.csv"));
        assert!(spec.input.has_header);
        assert_eq!(spec.analysis.threshold, 100_000.0);
        assert_eq!(spec.analysis.icer_digits, 2);
        assert!(!spec.output.original.enabled);
        assert!(spec.output.frontier.enabled);
        assert!(spec.output.chart.enabled);
        assert!(spec.output.chart.invert_axes);
        assert_eq!(spec.output.chart.title, "Efficiency Frontier");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let yaml = r#"
input:
  path: data.csv
output:
  original:
    enabled: true
  chart:
    mark_optimal: false
"#;
        let spec: FrontierSpec = serde_yaml::from_str(yaml).unwrap();
        assert!(spec.output.original.enabled);
        assert_eq!(spec.output.original.path, PathBuf::from("original_data.csv"));
        assert!(!spec.output.chart.mark_optimal);
        assert!(spec.output.chart.list_frontier);
        assert_eq!(spec.output.chart.path, PathBuf::from("graph.svg"));
    }

    #[test]
    fn test_quoted_booleans() {
        let yaml = r#"
input:
  path: data.csv
  has_header: "false"
output:
  chart:
    enabled: "FALSE"
"#;
        let spec: FrontierSpec = serde_yaml::from_str(yaml).unwrap();
        assert!(!spec.input.has_header);
        assert!(!spec.output.chart.enabled);
    }

    #[test]
    fn test_invalid_quoted_boolean_is_rejected() {
        let yaml = "input:\n  path: d.csv\n  has_header: \"maybe\"\n";
        let err = serde_yaml::from_str::<FrontierSpec>(yaml).unwrap_err();
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn test_spec_yaml_roundtrip() {
        let spec = FrontierSpec::for_input("strategies.csv");
        let yaml = serde_yaml::to_string(&spec).unwrap();
        let back: FrontierSpec = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, spec);
    }
}
