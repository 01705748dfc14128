//! Rack-to-words generation engine
//!
//! Drives the pipeline: rack normalization, candidate expansion, oracle
//! queries, and result finalization.

mod config;
mod engine;

pub use config::SolverConfig;
pub use engine::{RackSolver, Solution};
