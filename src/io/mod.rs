//! Strategy table I/O
//!
//! Reads `label,benefit,cost` rows from CSV and writes the original snapshot
//! and the finalized frontier back out.

mod load;
mod save;

pub use load::{load_strategies, read_strategies};
pub use save::{save_frontier, save_original, write_table};
