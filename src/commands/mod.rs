//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::{SimpleCommand, run_simple};
pub use simulate::{SimulationConfig, SimulationStats, WordStats, run_simulation};
