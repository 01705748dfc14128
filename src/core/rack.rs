//! Rack representation
//!
//! A Rack is the normalized form of a hand of tiles: a histogram of fixed
//! letters plus a blank count. Tile order never matters — two racks with the
//! same letters and blanks compare equal regardless of input order.

use super::tile::{ALPHABET_LEN, Tile};
use std::fmt;

/// A normalized rack of tiles
///
/// Invariant: `fixed_count() + wildcards() == len()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rack {
    counts: [u8; ALPHABET_LEN],
    wildcards: u8,
}

/// Error type for invalid rack input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RackError {
    /// A character that is neither an ASCII letter nor a blank marker
    InvalidTile(char),
}

impl fmt::Display for RackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTile(c) => {
                write!(f, "invalid rack tile {c:?}: expected a letter, '_' or ' '")
            }
        }
    }
}

impl std::error::Error for RackError {}

impl Rack {
    /// Parse a rack from a string, one character per tile
    ///
    /// Letters are case-folded to uppercase; `'_'` and `' '` count as blanks.
    /// This is the strict policy: any other character is rejected and
    /// generation does not proceed. Use [`Rack::parse_lenient`] to skip
    /// unrecognized tiles instead.
    ///
    /// # Errors
    /// Returns `RackError::InvalidTile` for the first unrecognized character.
    ///
    /// # Examples
    /// ```
    /// use rack_solver::core::{Rack, RackError};
    ///
    /// let rack = Rack::parse("ANC_LFT").unwrap();
    /// assert_eq!(rack.len(), 7);
    /// assert_eq!(rack.wildcards(), 1);
    ///
    /// assert_eq!(Rack::parse("AB3"), Err(RackError::InvalidTile('3')));
    /// ```
    pub fn parse(input: &str) -> Result<Self, RackError> {
        let mut rack = Self::default();
        for c in input.chars() {
            match Tile::from_char(c) {
                Some(tile) => rack.push(tile),
                None => return Err(RackError::InvalidTile(c)),
            }
        }
        Ok(rack)
    }

    /// Parse a rack, silently skipping unrecognized characters
    ///
    /// The lenient policy: anything that is not a letter or a blank marker is
    /// ignored rather than rejected.
    ///
    /// # Examples
    /// ```
    /// use rack_solver::core::Rack;
    ///
    /// let rack = Rack::parse_lenient("A-B!C");
    /// assert_eq!(rack.len(), 3);
    /// ```
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        input.chars().filter_map(Tile::from_char).collect()
    }

    /// Add a tile to the rack
    pub fn push(&mut self, tile: Tile) {
        match tile {
            Tile::Letter(index) => self.counts[index as usize] += 1,
            Tile::Wildcard => self.wildcards += 1,
        }
    }

    /// Total number of tiles (fixed letters plus blanks)
    #[must_use]
    pub fn len(&self) -> usize {
        self.fixed_count() + self.wildcards as usize
    }

    /// Whether the rack holds no tiles
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of blank tiles
    #[must_use]
    pub const fn wildcards(&self) -> usize {
        self.wildcards as usize
    }

    /// Number of fixed-letter tiles
    #[must_use]
    pub fn fixed_count(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// How many copies of a letter the rack holds (blanks excluded)
    ///
    /// Returns 0 for non-letter characters.
    #[must_use]
    pub fn count_of(&self, letter: char) -> u8 {
        match Tile::from_char(letter) {
            Some(Tile::Letter(index)) => self.counts[index as usize],
            _ => 0,
        }
    }

    /// The fixed-letter histogram, indexed by letter (0 = A)
    pub(crate) const fn counts(&self) -> &[u8; ALPHABET_LEN] {
        &self.counts
    }
}

impl FromIterator<Tile> for Rack {
    fn from_iter<T: IntoIterator<Item = Tile>>(iter: T) -> Self {
        let mut rack = Self::default();
        for tile in iter {
            rack.push(tile);
        }
        rack
    }
}

impl fmt::Display for Rack {
    /// Sorted letters followed by one `_` per blank
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, &count) in self.counts.iter().enumerate() {
            for _ in 0..count {
                write!(f, "{}", (b'A' + index as u8) as char)?;
            }
        }
        for _ in 0..self.wildcards {
            write!(f, "_")?;
        }
        Ok(())
    }
}
