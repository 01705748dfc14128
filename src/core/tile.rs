//! Rack tile representation
//!
//! A tile is either a concrete letter or a blank (wildcard) that can stand in
//! for any letter when a word is formed.

use std::fmt;

/// Number of letters in the alphabet (A-Z)
pub const ALPHABET_LEN: usize = 26;

/// A single rack tile
///
/// Letters are stored as indices 0..26 (A..Z) for direct histogram addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// A fixed letter tile
    Letter(u8),
    /// A blank tile, usable as any letter
    Wildcard,
}

impl Tile {
    /// Parse a tile from a single character
    ///
    /// Letters are case-folded. Both `'_'` and `' '` are recognized blank
    /// spellings. Returns `None` for anything else.
    ///
    /// # Examples
    /// ```
    /// use rack_solver::core::Tile;
    ///
    /// assert_eq!(Tile::from_char('a'), Some(Tile::Letter(0)));
    /// assert_eq!(Tile::from_char('Z'), Some(Tile::Letter(25)));
    /// assert_eq!(Tile::from_char('_'), Some(Tile::Wildcard));
    /// assert_eq!(Tile::from_char('?'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '_' | ' ' => Some(Self::Wildcard),
            'a'..='z' => Some(Self::Letter(c as u8 - b'a')),
            'A'..='Z' => Some(Self::Letter(c as u8 - b'A')),
            _ => None,
        }
    }

    /// The canonical uppercase character for this tile (`'_'` for blanks)
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Letter(index) => (b'A' + index) as char,
            Self::Wildcard => '_',
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
