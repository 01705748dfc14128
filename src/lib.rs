//! Rack Solver
//!
//! Enumerates every dictionary-valid word formable from a rack of letter
//! tiles, where some tiles may be blanks standing in for any letter.
//!
//! # Quick Start
//!
//! ```rust
//! use rack_solver::core::Rack;
//! use rack_solver::oracle::WordListOracle;
//! use rack_solver::solver::{RackSolver, SolverConfig};
//!
//! // Any dictionary backend works through the AnagramOracle trait;
//! // WordListOracle is the built-in in-memory one.
//! let oracle = WordListOracle::new(["clan", "flan", "fact", "can"]);
//! let solver = RackSolver::new(&oracle, SolverConfig::default());
//!
//! // '_' (or ' ') marks a blank tile.
//! let rack = Rack::parse("ANC_LFT").unwrap();
//! let solution = solver.solve(&rack);
//!
//! assert_eq!(solution.words(), ["CAN", "CLAN", "FACT", "FLAN"]);
//! assert_eq!(solution.len(), 4);
//! ```

// Core domain types
pub mod core;

// Candidate multiset expansion
pub mod expand;

// Word-validity oracle seam and reference implementation
pub mod oracle;

// Generation engine
pub mod solver;
