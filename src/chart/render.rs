//! SVG rendering of the frontier chart

use crate::frontier::Strategy;
use crate::{Error, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// Canvas size in pixels
pub const CHART_SIZE: (u32, u32) = (1500, 750);

const LEGEND_LINE_HEIGHT: i32 = 18;

fn chart_err(e: impl std::fmt::Display) -> Error {
    Error::Chart(e.to_string())
}

/// Everything needed to draw a frontier chart
///
/// `points` is the full original point set, `frontier` the connected
/// polyline. `invert_axes` puts cost on the x axis and benefit on the y
/// axis, the usual orientation for cost-effectiveness planes.
#[derive(Debug, Clone)]
pub struct Chart<'a> {
    pub title: &'a str,
    pub points: &'a [Strategy],
    pub frontier: &'a [Strategy],
    pub optimal: Option<&'a Strategy>,
    pub legend: Option<String>,
    pub invert_axes: bool,
}

impl<'a> Chart<'a> {
    /// Chart of `points` with the `frontier` polyline and nothing else
    pub fn new(title: &'a str, points: &'a [Strategy], frontier: &'a [Strategy]) -> Self {
        Self {
            title,
            points,
            frontier,
            optimal: None,
            legend: None,
            invert_axes: true,
        }
    }

    /// Highlight the optimal strategy
    pub fn with_optimal(mut self, optimal: &'a Strategy) -> Self {
        self.optimal = Some(optimal);
        self
    }

    /// Add a legend text box
    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    /// Choose axis orientation
    pub fn with_invert_axes(mut self, invert_axes: bool) -> Self {
        self.invert_axes = invert_axes;
        self
    }

    /// Plot coordinates of a strategy
    pub fn xy(&self, strategy: &Strategy) -> (f64, f64) {
        if self.invert_axes {
            (strategy.cost, strategy.benefit)
        } else {
            (strategy.benefit, strategy.cost)
        }
    }

    fn axis_labels(&self) -> (&'static str, &'static str) {
        if self.invert_axes {
            ("Cost", "Benefit")
        } else {
            ("Benefit", "Cost")
        }
    }

    /// Padded axis ranges covering every point
    pub fn ranges(&self) -> (Range<f64>, Range<f64>) {
        let coords: Vec<(f64, f64)> = self
            .points
            .iter()
            .chain(self.frontier)
            .map(|s| self.xy(s))
            .collect();
        (
            padded(coords.iter().map(|c| c.0)),
            padded(coords.iter().map(|c| c.1)),
        )
    }

    /// Render to an SVG file
    pub fn save_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
        self.draw(root)?;
        tracing::info!(path = %path.display(), "wrote frontier chart");
        Ok(())
    }

    /// Render to an in-memory SVG document
    pub fn to_svg_string(&self) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
            self.draw(root)?;
        }
        Ok(svg)
    }

    fn draw<DB: DrawingBackend>(&self, root: DrawingArea<DB, Shift>) -> Result<()> {
        root.fill(&WHITE).map_err(chart_err)?;

        let (x_range, y_range) = self.ranges();
        let (x_desc, y_desc) = self.axis_labels();

        let mut chart = ChartBuilder::on(&root)
            .caption(self.title, ("sans-serif", 28))
            .margin(16)
            .x_label_area_size(48)
            .y_label_area_size(80)
            .build_cartesian_2d(x_range, y_range)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .x_desc(x_desc)
            .y_desc(y_desc)
            .draw()
            .map_err(chart_err)?;

        chart
            .draw_series(
                self.points
                    .iter()
                    .map(|s| Circle::new(self.xy(s), 3, BLUE.filled())),
            )
            .map_err(chart_err)?
            .label("All Data")
            .legend(|(x, y)| Circle::new((x, y), 3, BLUE.filled()));

        if let Some(optimal) = self.optimal {
            chart
                .draw_series(std::iter::once(Circle::new(
                    self.xy(optimal),
                    10,
                    CYAN.filled(),
                )))
                .map_err(chart_err)?
                .label("Optimal Strategy")
                .legend(|(x, y)| Circle::new((x, y), 6, CYAN.filled()));
        }

        chart
            .draw_series(LineSeries::new(
                self.frontier.iter().map(|s| self.xy(s)),
                RED.stroke_width(2),
            ))
            .map_err(chart_err)?
            .label("Efficiency Frontier")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(chart_err)?;

        if let Some(legend) = &self.legend {
            self.draw_legend(&root, legend)?;
        }

        root.present().map_err(chart_err)?;
        Ok(())
    }

    /// Legend box anchored at a fraction of the canvas, vertically centered
    fn draw_legend<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        legend: &str,
    ) -> Result<()> {
        let (width, height) = root.dim_in_pixel();
        let (x_frac, y_frac) = if self.invert_axes { (0.65, 0.35) } else { (0.35, 0.55) };

        let lines: Vec<&str> = legend.lines().collect();
        let block_height = LEGEND_LINE_HEIGHT * lines.len() as i32;
        let x = (f64::from(width) * x_frac) as i32;
        let top = (f64::from(height) * (1.0 - y_frac)) as i32 - block_height / 2;

        let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32;
        root.draw(&Rectangle::new(
            [
                (x - 8, top - 8),
                (x + longest * 8 + 8, top + block_height + 8),
            ],
            WHITE.mix(0.5).filled(),
        ))
        .map_err(chart_err)?;

        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let y = top + LEGEND_LINE_HEIGHT * i as i32;
            root.draw(&Text::new(
                line.to_string(),
                (x, y),
                ("sans-serif", 14).into_font(),
            ))
            .map_err(chart_err)?;
        }
        Ok(())
    }
}

/// Min/max of `values` widened by 5% on each side
fn padded(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let span = max - min;
    let pad = if span > 0.0 { span * 0.05 } else { min.abs().max(1.0) * 0.05 };
    (min - pad)..(max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn points() -> Vec<Strategy> {
        vec![
            Strategy::new("A", 10.0, 100.0),
            Strategy::new("B", 20.0, 150.0),
            Strategy::new("C", 15.0, 140.0),
            Strategy::new("D", 30.0, 400.0),
        ]
    }

    #[test]
    fn test_inverted_axes_put_cost_on_x() {
        let data = points();
        let chart = Chart::new("t", &data, &data);
        assert_eq!(chart.xy(&data[0]), (100.0, 10.0));

        let chart = chart.with_invert_axes(false);
        assert_eq!(chart.xy(&data[0]), (10.0, 100.0));
    }

    #[test]
    fn test_ranges_cover_points() {
        let data = points();
        let chart = Chart::new("t", &data, &data[..1]).with_invert_axes(false);
        let (x, y) = chart.ranges();
        assert!(x.start < 10.0 && x.end > 30.0);
        assert!(y.start < 100.0 && y.end > 400.0);
    }

    #[test]
    fn test_single_point_range_is_not_empty() {
        let range = padded([5.0].into_iter());
        assert!(range.start < 5.0 && range.end > 5.0);

        let range = padded(std::iter::empty());
        assert_eq!(range, 0.0..1.0);
    }

    #[test]
    fn test_svg_contains_title_and_legend() {
        let data = points();
        let frontier = vec![data[0].clone(), data[1].clone(), data[3].clone()];
        let svg = Chart::new("Efficiency Frontier", &data, &frontier)
            .with_optimal(&frontier[1])
            .with_legend("Optimal Strategy - B\n\n\nStrategies on Frontier")
            .to_svg_string()
            .unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Efficiency Frontier"));
        assert!(svg.contains("Strategies on Frontier"));
        assert!(svg.contains("Optimal Strategy - B"));
    }

    #[test]
    fn test_save_svg_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("charts/graph.svg");
        let data = points();
        Chart::new("Frontier", &data, &data[..2]).save_svg(&path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("Frontier"));
    }
}
