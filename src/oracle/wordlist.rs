//! In-memory word-list oracle
//!
//! Reference [`AnagramOracle`] backed by a plain word list. Each word is
//! indexed by its letter histogram, grouped by length; a query scans the
//! groups that fit in the bag and keeps words whose histogram is contained
//! in it.

use super::{AnagramOracle, OracleError};
use crate::core::{LetterBag, MIN_WORD_LEN};
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::Path;

/// One indexed dictionary entry: canonical text plus its letter bag
#[derive(Debug, Clone)]
struct IndexedWord {
    text: String,
    bag: LetterBag,
}

/// An [`AnagramOracle`] over an in-memory word list
///
/// Words shorter than two letters or containing non-letter characters are
/// skipped at build time, mirroring word-game dictionary conventions.
#[derive(Debug, Clone, Default)]
pub struct WordListOracle {
    by_length: FxHashMap<usize, Vec<IndexedWord>>,
}

impl WordListOracle {
    /// Build an oracle from a word list, skipping invalid entries
    ///
    /// # Examples
    /// ```
    /// use rack_solver::core::LetterBag;
    /// use rack_solver::oracle::{AnagramOracle, WordListOracle};
    ///
    /// let oracle = WordListOracle::new(["clan", "can", "an", "dog"]);
    /// let bag = LetterBag::from_word("clan").unwrap();
    /// let mut words = oracle.sub_anagrams(&bag).unwrap();
    /// words.sort();
    /// assert_eq!(words, ["AN", "CAN", "CLAN"]);
    /// ```
    #[must_use]
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_length: FxHashMap<usize, Vec<IndexedWord>> = FxHashMap::default();
        for word in words {
            let word = word.as_ref().trim();
            if word.len() < MIN_WORD_LEN {
                continue;
            }
            let Some(bag) = LetterBag::from_word(word) else {
                continue;
            };
            by_length.entry(bag.len()).or_default().push(IndexedWord {
                text: word.to_ascii_uppercase(),
                bag,
            });
        }
        Self { by_length }
    }

    /// Load an oracle from a file with one word per line
    ///
    /// Blank and invalid lines are skipped, like [`WordListOracle::new`].
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::new(content.lines()))
    }

    /// Number of indexed words
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }

    /// Whether the dictionary is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }
}

impl AnagramOracle for WordListOracle {
    fn sub_anagrams(&self, bag: &LetterBag) -> Result<Vec<String>, OracleError> {
        let mut matches = Vec::new();
        for (&length, entries) in &self.by_length {
            if length > bag.len() {
                continue;
            }
            for entry in entries {
                if bag.contains(&entry.bag) {
                    matches.push(entry.text.clone());
                }
            }
        }
        Ok(matches)
    }
}
