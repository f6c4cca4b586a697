//! Cost-effectiveness efficiency frontier
//!
//! Builds the lower convex envelope of a cost/benefit point cloud:
//!
//! 1. sort strategies ascending by `(benefit, cost)`
//! 2. drop weakly dominated strategies ([`dominance`])
//! 3. drop extendedly dominated strategies until ICERs are non-decreasing ([`builder`])
//! 4. annotate survivors with their ICER, the baseline gets none
//! 5. pick the optimal strategy for a willingness-to-pay threshold ([`optimal`])
//!
//! # Example
//!
//! ```
//! use frontera::frontier::{Frontier, Strategy};
//!
//! let frontier = Frontier::build(vec![
//!     Strategy::new("A", 10.0, 100.0),
//!     Strategy::new("B", 20.0, 150.0),
//!     Strategy::new("C", 15.0, 140.0),
//!     Strategy::new("D", 30.0, 400.0),
//! ])?;
//!
//! let labels: Vec<_> = frontier.iter().map(|s| s.label.as_str()).collect();
//! assert_eq!(labels, ["A", "B", "D"]);
//! assert_eq!(frontier.optimal(10.0).label, "B");
//! # Ok::<(), frontera::frontier::FrontierError>(())
//! ```

pub mod builder;
pub mod dominance;
mod error;
pub mod optimal;
mod strategy;

#[cfg(test)]
mod proptests;

pub use builder::{compute_icers, drop_extendedly_dominated, icer_between, Frontier};
pub use dominance::{drop_dominated, sort_strategies};
pub use error::{FrontierError, Result};
pub use optimal::select_optimal;
pub use strategy::{Strategy, DEFAULT_THRESHOLD, NOT_APPLICABLE};
