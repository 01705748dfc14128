//! Engine configuration

/// Tuning knobs for a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Cap on candidate bags generated across the whole run
    ///
    /// Blank-heavy racks explode combinatorially; once this many candidates
    /// have been generated the run stops and the solution is flagged
    /// truncated. Partial results are still returned.
    pub max_candidates: usize,
}

impl SolverConfig {
    /// Default candidate cap: ample for full racks with up to two blanks
    pub const DEFAULT_MAX_CANDIDATES: usize = 200_000;

    /// Create a config with an explicit candidate cap
    ///
    /// # Examples
    /// ```
    /// use rack_solver::solver::SolverConfig;
    ///
    /// let config = SolverConfig::new(1_000);
    /// assert_eq!(config.max_candidates, 1_000);
    /// ```
    #[must_use]
    pub const fn new(max_candidates: usize) -> Self {
        Self { max_candidates }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_CANDIDATES)
    }
}
