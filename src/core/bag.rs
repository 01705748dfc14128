//! Candidate letter bags
//!
//! A `LetterBag` is a concrete multiset of letters — the unit the anagram
//! oracle is queried with. The engine produces one bag per distinct
//! sub-selection of rack letters plus blank substitution.

use super::tile::ALPHABET_LEN;
use std::fmt;

/// A multiset of concrete letters
///
/// Stored as a histogram, so two bags with the same letters compare (and
/// hash) equal regardless of the order letters were added. Letter order is
/// meaningless for anagram lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LetterBag {
    counts: [u8; ALPHABET_LEN],
    len: usize,
}

impl LetterBag {
    /// Build a bag from a word's letters
    ///
    /// Case-folds to uppercase. Returns `None` if the word contains anything
    /// other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use rack_solver::core::LetterBag;
    ///
    /// let bag = LetterBag::from_word("Clan").unwrap();
    /// assert_eq!(bag.len(), 4);
    /// assert!(LetterBag::from_word("no-op").is_none());
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        let mut bag = Self::default();
        for c in word.chars() {
            let index = match c {
                'a'..='z' => c as u8 - b'a',
                'A'..='Z' => c as u8 - b'A',
                _ => return None,
            };
            bag.push(index);
        }
        Some(bag)
    }

    /// Add one copy of a letter (by index, 0 = A)
    ///
    /// # Panics
    /// Panics if `letter >= 26`.
    pub fn push(&mut self, letter: u8) {
        self.counts[letter as usize] += 1;
        self.len += 1;
    }

    /// Remove one copy of a letter (by index, 0 = A)
    ///
    /// # Panics
    /// Panics if the bag holds no copy of the letter.
    pub(crate) fn pop(&mut self, letter: u8) {
        self.counts[letter as usize] -= 1;
        self.len -= 1;
    }

    /// Number of letters in the bag, multiplicity included
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the bag is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// How many copies of a letter the bag holds (by index, 0 = A)
    #[must_use]
    pub const fn count(&self, letter: u8) -> u8 {
        self.counts[letter as usize]
    }

    /// Whether `other` is a sub-multiset of this bag
    ///
    /// True when every letter of `other` appears here at least as often.
    /// This is the word-formability test: a word can be spelled from a bag
    /// exactly when the word's own bag is contained in it.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        if other.len > self.len {
            return false;
        }
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(mine, theirs)| theirs <= mine)
    }
}

impl fmt::Display for LetterBag {
    /// Letters in sorted order, e.g. `AACL`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, &count) in self.counts.iter().enumerate() {
            for _ in 0..count {
                write!(f, "{}", (b'A' + index as u8) as char)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_word_counts_multiplicity() {
        let bag = LetterBag::from_word("banana").unwrap();
        assert_eq!(bag.len(), 6);
        assert_eq!(bag.count(0), 3); // A
        assert_eq!(bag.count(1), 1); // B
        assert_eq!(bag.count(13), 2); // N
    }

    #[test]
    fn from_word_case_insensitive() {
        assert_eq!(
            LetterBag::from_word("Clan").unwrap(),
            LetterBag::from_word("CLAN").unwrap()
        );
    }

    #[test]
    fn from_word_rejects_non_letters() {
        assert!(LetterBag::from_word("ab-c").is_none());
        assert!(LetterBag::from_word("a b").is_none());
        assert!(LetterBag::from_word("ab3").is_none());
    }

    #[test]
    fn equality_is_order_independent() {
        assert_eq!(
            LetterBag::from_word("clan").unwrap(),
            LetterBag::from_word("ncla").unwrap()
        );
    }

    #[test]
    fn push_pop_round_trip() {
        let mut bag = LetterBag::from_word("ca").unwrap();
        bag.push(13); // N
        assert_eq!(bag, LetterBag::from_word("can").unwrap());
        bag.pop(13);
        assert_eq!(bag, LetterBag::from_word("ca").unwrap());
    }

    #[test]
    fn contains_respects_multiplicity() {
        let pool = LetterBag::from_word("aab").unwrap();
        assert!(pool.contains(&LetterBag::from_word("aa").unwrap()));
        assert!(pool.contains(&LetterBag::from_word("ab").unwrap()));
        assert!(pool.contains(&LetterBag::from_word("aab").unwrap()));
        assert!(!pool.contains(&LetterBag::from_word("bb").unwrap()));
        assert!(!pool.contains(&LetterBag::from_word("aaab").unwrap()));
        assert!(!pool.contains(&LetterBag::from_word("abc").unwrap()));
    }

    #[test]
    fn contains_empty_bag() {
        let pool = LetterBag::from_word("xyz").unwrap();
        assert!(pool.contains(&LetterBag::default()));
        assert!(LetterBag::default().contains(&LetterBag::default()));
    }

    #[test]
    fn display_sorted() {
        assert_eq!(LetterBag::from_word("clan").unwrap().to_string(), "ACLN");
    }
}
