//! End-to-end frontier run
//!
//! Reads strategies, builds the frontier, picks the optimum and writes the
//! artifacts a [`FrontierSpec`] enables.

use crate::chart::{legend_text, Chart};
use crate::config::FrontierSpec;
use crate::error::Result;
use crate::frontier::{Frontier, Strategy};
use crate::io::{load_strategies, save_frontier, save_original};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Kind of file a run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Original,
    Frontier,
    Chart,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Original => write!(f, "original"),
            ArtifactKind::Frontier => write!(f, "frontier"),
            ArtifactKind::Chart => write!(f, "chart"),
        }
    }
}

/// File written during a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

impl Artifact {
    fn new(kind: ArtifactKind, path: &Path) -> Self {
        Self {
            kind,
            path: path.to_path_buf(),
        }
    }
}

/// Outcome of a frontier run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontierReport {
    /// Input strategies in the order they were read
    pub original: Vec<Strategy>,
    /// Finalized frontier, benefit ascending
    pub frontier: Frontier,
    /// Best frontier member at `threshold`
    pub optimal: Strategy,
    pub threshold: f64,
    /// Files written, in write order
    pub artifacts: Vec<Artifact>,
}

/// Build the frontier for `strategies` and write the enabled artifacts
pub fn calculate_frontier(spec: &FrontierSpec, strategies: Vec<Strategy>) -> Result<FrontierReport> {
    let output = &spec.output;
    let mut artifacts = Vec::new();

    // Nothing is written unless the frontier builds.
    let original = strategies.clone();
    let frontier = Frontier::build(strategies)?;
    let threshold = spec.analysis.threshold;
    let optimal = frontier.optimal(threshold);
    tracing::info!(
        members = frontier.len(),
        optimal = %optimal.label,
        threshold,
        "frontier computed"
    );

    if output.original.enabled {
        save_original(&original, &output.original.path)?;
        artifacts.push(Artifact::new(ArtifactKind::Original, &output.original.path));
    }

    if output.frontier.enabled {
        save_frontier(frontier.strategies(), &output.frontier.path)?;
        artifacts.push(Artifact::new(ArtifactKind::Frontier, &output.frontier.path));
    }

    if output.chart.enabled {
        let chart_spec = &output.chart;
        let marked = chart_spec.mark_optimal.then_some(&optimal);

        let mut chart = Chart::new(&chart_spec.title, &original, frontier.strategies())
            .with_invert_axes(chart_spec.invert_axes);
        if let Some(optimal) = marked {
            chart = chart.with_optimal(optimal);
        }
        if chart_spec.list_frontier {
            chart = chart.with_legend(legend_text(
                frontier.strategies(),
                marked,
                spec.analysis.icer_digits,
            ));
        }
        chart.save_svg(&chart_spec.path)?;
        artifacts.push(Artifact::new(ArtifactKind::Chart, &chart_spec.path));
    }

    Ok(FrontierReport {
        original,
        frontier,
        optimal,
        threshold,
        artifacts,
    })
}

/// Load `spec.input` and run [`calculate_frontier`]
pub fn run_from_spec(spec: &FrontierSpec) -> Result<FrontierReport> {
    let strategies = load_strategies(&spec.input.path, spec.input.has_header)?;
    calculate_frontier(spec, strategies)
}
