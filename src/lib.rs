//! Frontera: cost-effectiveness efficiency frontiers
//!
//! Given strategies with a benefit and a cost, frontera sorts them, drops
//! strongly and extendedly dominated options, attaches incremental
//! cost-effectiveness ratios (ICERs) and picks the best strategy for a
//! willingness-to-pay threshold.
//!
//! # Modules
//!
//! - [`frontier`]: dominance pruning, ICERs and optimal selection
//! - [`io`]: CSV strategy tables
//! - [`chart`]: SVG frontier charts
//! - [`config`]: YAML run specifications and CLI arguments
//! - [`pipeline`]: end-to-end runs that write the enabled artifacts
//! - [`cli`]: command handlers for the `frontera` binary

pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod frontier;
pub mod io;
pub mod pipeline;

pub use error::{Error, Result};
pub use frontier::{Frontier, FrontierError, Strategy, DEFAULT_THRESHOLD};
pub use pipeline::{calculate_frontier, run_from_spec, FrontierReport};
