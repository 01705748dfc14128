//! Core domain types for rack solving
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod bag;
mod rack;
mod tile;

pub use bag::LetterBag;
pub use rack::{Rack, RackError};
pub use tile::{ALPHABET_LEN, Tile};

/// Shortest word the engine looks for
///
/// Word-game dictionaries (e.g. TWL06) store words of length 2 and up, so a
/// rack of size 0 or 1 can never produce anything.
pub const MIN_WORD_LEN: usize = 2;
