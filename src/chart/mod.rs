//! Frontier chart
//!
//! Scatter of every strategy, the frontier polyline, an optional optimal
//! marker and an optional legend box listing frontier ICERs.

mod legend;
mod render;

pub use legend::legend_text;
pub use render::{Chart, CHART_SIZE};
