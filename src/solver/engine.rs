//! Main rack solver interface

use super::config::SolverConfig;
use crate::core::{LetterBag, MIN_WORD_LEN, Rack};
use crate::expand::{Expansion, for_each_candidate};
use crate::oracle::AnagramOracle;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

/// Main rack solver
///
/// Coordinates candidate generation and oracle queries for a rack, collecting
/// every dictionary-valid word formable from some or all of its tiles. Holds
/// no state between calls: each [`solve`](RackSolver::solve) is a pure
/// function of the rack and the oracle.
pub struct RackSolver<'a, O: AnagramOracle> {
    oracle: &'a O,
    config: SolverConfig,
}

/// Finalized output of a generation run
///
/// Words are uppercase, deduplicated, and lexicographically sorted, so the
/// same rack and dictionary always produce the identical sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    words: Vec<String>,
    truncated: bool,
}

impl<'a, O: AnagramOracle + Sync> RackSolver<'a, O> {
    /// Create a new solver over an oracle
    ///
    /// # Parameters
    /// - `oracle`: the dictionary-backed anagram lookup to query
    /// - `config`: candidate budget and other knobs
    pub const fn new(oracle: &'a O, config: SolverConfig) -> Self {
        Self { oracle, config }
    }

    /// Enumerate every dictionary word formable from the rack
    ///
    /// For each target length from 2 up to the rack size, generates the
    /// distinct candidate letter bags reachable from the rack (blanks decay
    /// to any alphabet letter), queries the oracle once per distinct bag, and
    /// keeps exact-length matches. Oracle failures degrade that one candidate
    /// to an empty contribution; the run continues.
    ///
    /// Candidate bags of a given length are queried in parallel. That is safe
    /// because the oracle is read-only and set insertion is commutative and
    /// idempotent — the output is a set, not a sequence.
    ///
    /// # Examples
    /// ```
    /// use rack_solver::core::Rack;
    /// use rack_solver::oracle::WordListOracle;
    /// use rack_solver::solver::{RackSolver, SolverConfig};
    ///
    /// let oracle = WordListOracle::new(["clan", "flan", "can"]);
    /// let solver = RackSolver::new(&oracle, SolverConfig::default());
    ///
    /// let rack = Rack::parse("ANC_LFT").unwrap();
    /// let solution = solver.solve(&rack);
    /// assert_eq!(solution.words(), ["CAN", "CLAN", "FLAN"]);
    /// assert!(!solution.is_truncated());
    /// ```
    #[must_use]
    pub fn solve(&self, rack: &Rack) -> Solution {
        let mut results: FxHashSet<String> = FxHashSet::default();
        let mut budget = self.config.max_candidates;
        let mut truncated = false;

        for length in MIN_WORD_LEN..=rack.len() {
            // The same bag is reachable through different blank splits; dedup
            // before querying so the oracle sees each bag once.
            let mut bags: FxHashSet<LetterBag> = FxHashSet::default();
            let outcome = for_each_candidate(rack, length, &mut budget, &mut |bag| {
                bags.insert(bag);
            });

            let bags: Vec<LetterBag> = bags.into_iter().collect();
            let found: Vec<Vec<String>> = bags
                .par_iter()
                .map(|bag| self.query(bag, length))
                .collect();
            for words in found {
                results.extend(words);
            }

            if outcome == Expansion::Truncated {
                debug!(
                    rack = %rack,
                    length,
                    max_candidates = self.config.max_candidates,
                    "candidate budget exhausted, returning partial results"
                );
                truncated = true;
                break;
            }
        }

        Solution::from_parts(results, truncated)
    }

    /// Query one candidate bag, keeping exact-length matches in uppercase
    ///
    /// A failed query is reported and treated as empty: partial results
    /// remain useful.
    fn query(&self, bag: &LetterBag, length: usize) -> Vec<String> {
        match self.oracle.sub_anagrams(bag) {
            Ok(words) => words
                .into_iter()
                .filter(|word| word.len() == length)
                .map(|word| word.to_ascii_uppercase())
                .collect(),
            Err(error) => {
                warn!(bag = %bag, %error, "oracle query failed, skipping candidate");
                Vec::new()
            }
        }
    }
}

impl Solution {
    fn from_parts(results: FxHashSet<String>, truncated: bool) -> Self {
        let mut words: Vec<String> = results.into_iter().collect();
        words.sort_unstable();
        Self { words, truncated }
    }

    /// The words, uppercase and lexicographically sorted
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of distinct words found
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no words were found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the candidate budget ran out before enumeration finished
    ///
    /// A truncated solution is a valid partial answer, never a wrong one.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let needle = word.to_ascii_uppercase();
        self.words.binary_search(&needle).is_ok()
    }

    /// Consume the solution, yielding the sorted words
    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{OracleError, WordListOracle};

    fn setup_oracle() -> WordListOracle {
        WordListOracle::new([
            "clan", "flan", "fact", "can", "cat", "fat", "tan", "an", "at", "la", "aa",
        ])
    }

    fn solve(rack: &str) -> Solution {
        let oracle = setup_oracle();
        let solver = RackSolver::new(&oracle, SolverConfig::default());
        solver.solve(&Rack::parse(rack).unwrap())
    }

    #[test]
    fn finds_words_without_blanks() {
        let solution = solve("ANCLFT");
        assert!(solution.contains("CLAN"));
        assert!(solution.contains("FLAN"));
        assert!(solution.contains("FACT"));
        assert!(solution.contains("AN"));
    }

    #[test]
    fn respects_letter_multiplicity() {
        // One A in the rack and no blanks: AA is out of reach.
        let solution = solve("ANCLFT");
        assert!(!solution.contains("AA"));
        // Two A's make it reachable.
        assert!(solve("AA").contains("AA"));
    }

    #[test]
    fn double_letter_rack_excludes_foreign_letters() {
        let oracle = WordListOracle::new(["aa", "ab"]);
        let solver = RackSolver::new(&oracle, SolverConfig::default());
        let solution = solver.solve(&Rack::parse("AA").unwrap());
        assert_eq!(solution.words(), ["AA"]);
    }

    #[test]
    fn blank_reaches_missing_letter() {
        // No A in the fixed letters; the blank supplies it.
        let solution = solve("NCLFT_");
        assert!(solution.contains("CLAN"));
        assert!(solution.contains("FLAN"));
    }

    #[test]
    fn output_sorted_and_deduplicated() {
        let solution = solve("ANC_LFT");
        let words = solution.words();
        let mut sorted = words.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(words, sorted.as_slice());
    }

    #[test]
    fn tiny_racks_yield_nothing() {
        assert!(solve("").is_empty());
        assert!(solve("A").is_empty());
        assert!(solve("_").is_empty());
    }

    #[test]
    fn solve_is_idempotent() {
        assert_eq!(solve("ANC_LFT"), solve("ANC_LFT"));
    }

    #[test]
    fn truncation_flagged_not_fatal() {
        let oracle = setup_oracle();
        let solver = RackSolver::new(&oracle, SolverConfig::new(5));
        let solution = solver.solve(&Rack::parse("ANC__LFT").unwrap());
        assert!(solution.is_truncated());
        // Whatever was found before the cap is still a valid subset.
        let full = solve("ANC__LFT");
        assert!(solution.words().iter().all(|w| full.contains(w)));
    }

    #[test]
    fn untruncated_run_not_flagged() {
        assert!(!solve("ANCLFT").is_truncated());
    }

    struct FailingOracle;

    impl AnagramOracle for FailingOracle {
        fn sub_anagrams(&self, _bag: &LetterBag) -> Result<Vec<String>, OracleError> {
            Err(OracleError::Unavailable("dictionary offline".into()))
        }
    }

    #[test]
    fn oracle_failure_degrades_to_empty() {
        let oracle = FailingOracle;
        let solver = RackSolver::new(&oracle, SolverConfig::default());
        let solution = solver.solve(&Rack::parse("ANCLFT").unwrap());
        assert!(solution.is_empty());
        assert!(!solution.is_truncated());
    }

    /// Fails for any bag containing a C, answers normally otherwise.
    struct FlakyOracle(WordListOracle);

    impl AnagramOracle for FlakyOracle {
        fn sub_anagrams(&self, bag: &LetterBag) -> Result<Vec<String>, OracleError> {
            if bag.count(2) > 0 {
                return Err(OracleError::Timeout);
            }
            self.0.sub_anagrams(bag)
        }
    }

    #[test]
    fn partial_oracle_failure_keeps_other_candidates() {
        let oracle = FlakyOracle(setup_oracle());
        let solver = RackSolver::new(&oracle, SolverConfig::default());
        let solution = solver.solve(&Rack::parse("ANCLFT").unwrap());
        // C-bags fail, so CLAN and FACT are lost, but FLAN survives.
        assert!(!solution.contains("CLAN"));
        assert!(solution.contains("FLAN"));
        assert!(solution.contains("FAT"));
    }

    #[test]
    fn solution_contains_is_case_insensitive() {
        let solution = solve("ANCLFT");
        assert!(solution.contains("clan"));
        assert!(solution.contains("Clan"));
        assert!(!solution.contains("zzz"));
    }
}
