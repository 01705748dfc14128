//! Word-validity oracle seam
//!
//! The engine never embeds dictionary knowledge; it asks an [`AnagramOracle`]
//! which words can be spelled from a bag of letters. Any dictionary backend
//! (in-memory list, DAWG, network service) plugs in through this trait.
//! A reference in-memory implementation is provided in [`wordlist`].

mod wordlist;

pub use wordlist::WordListOracle;

use crate::core::LetterBag;
use std::fmt;

/// Error type for failed oracle queries
///
/// A failed query degrades that one candidate to an empty contribution; it
/// never aborts a whole generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// The backing dictionary could not be reached
    Unavailable(String),
    /// A single query exceeded its deadline
    Timeout,
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "oracle unavailable: {reason}"),
            Self::Timeout => write!(f, "oracle query timed out"),
        }
    }
}

impl std::error::Error for OracleError {}

/// A dictionary-backed anagram lookup
///
/// Given a bag of letters, returns every valid word spellable from a
/// sub-selection of the bag — shorter words included, the caller filters by
/// length. Queries are read-only and idempotent: the same bag always yields
/// the same word set. Case of returned words is not significant; the caller
/// canonicalizes.
///
/// Implementations that wrap a remote or slow backend should enforce a
/// per-query deadline and surface it as [`OracleError::Timeout`].
pub trait AnagramOracle {
    /// All dictionary words formable from a sub-selection of `bag`'s letters
    ///
    /// # Errors
    /// Returns `OracleError` if the backend fails or times out for this query.
    fn sub_anagrams(&self, bag: &LetterBag) -> Result<Vec<String>, OracleError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            OracleError::Unavailable("connection refused".into()).to_string(),
            "oracle unavailable: connection refused"
        );
        assert_eq!(OracleError::Timeout.to_string(), "oracle query timed out");
    }
}
