//! Search configuration.

/// Upper sanity bound on the bit-vector length.
pub const MAX_NB_BITS: usize = 100_000_000;

/// Smallest population for which the selection bands are non-empty
/// (the donor band is `population_size / 10` individuals).
pub const MIN_POPULATION: usize = 10;

/// Configuration for a bit-string search run.
///
/// # Constraints
///
/// `population_size` must be at least [`MIN_POPULATION`] and at most
/// `nb_bits`; `nb_bits` must be at most [`MAX_NB_BITS`]. Violations are
/// reported by [`validate`](Self::validate); the runner panics on an
/// invalid configuration before any population is allocated.
///
/// # Examples
///
/// ```
/// use bitevo::SearchConfig;
///
/// let config = SearchConfig::new(1_000, 50)
///     .with_seed(42)
///     .with_progress_interval(200);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Length of every bit vector, including the hidden target.
    pub nb_bits: usize,

    /// Number of individuals in the population.
    pub population_size: usize,

    /// Generation ceiling; the search stops without a match once the
    /// generation counter reaches it.
    pub max_generations: usize,

    /// Generations between progress reports and history samples.
    pub progress_interval: usize,

    /// Whether to run the evaluation, selection, and mutation phases on
    /// the rayon pool.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl SearchConfig {
    /// Creates a new configuration with the given vector length and
    /// population size.
    pub fn new(nb_bits: usize, population_size: usize) -> Self {
        Self {
            nb_bits,
            population_size,
            max_generations: 1_000_000,
            progress_interval: 100,
            parallel: true,
            seed: None,
        }
    }

    /// Preset matching the reference benchmark invocation:
    /// 10 000 bits, population 100.
    pub fn benchmark() -> Self {
        Self::new(10_000, 100)
    }

    /// Sets the generation ceiling.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the progress reporting interval.
    pub fn with_progress_interval(mut self, n: usize) -> Self {
        self.progress_interval = n;
        self
    }

    /// Enables or disables parallel phase execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.nb_bits == 0 {
            return Err("nb_bits must be at least 1".into());
        }
        if self.nb_bits > MAX_NB_BITS {
            return Err(format!("nb_bits must be at most {MAX_NB_BITS}"));
        }
        if self.population_size < MIN_POPULATION {
            return Err(format!(
                "population_size must be at least {MIN_POPULATION}"
            ));
        }
        if self.population_size > self.nb_bits {
            return Err(format!(
                "population_size ({}) must not exceed nb_bits ({})",
                self.population_size, self.nb_bits
            ));
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if self.progress_interval == 0 {
            return Err("progress_interval must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::new(1_000, 50);
        assert_eq!(config.nb_bits, 1_000);
        assert_eq!(config.population_size, 50);
        assert_eq!(config.max_generations, 1_000_000);
        assert_eq!(config.progress_interval, 100);
        assert!(config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::new(500, 20)
            .with_max_generations(10_000)
            .with_progress_interval(50)
            .with_parallel(false)
            .with_seed(7);
        assert_eq!(config.max_generations, 10_000);
        assert_eq!(config.progress_interval, 50);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_benchmark_preset() {
        let config = SearchConfig::benchmark();
        assert_eq!(config.nb_bits, 10_000);
        assert_eq!(config.population_size, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_ok() {
        assert!(SearchConfig::new(100, 20).validate().is_ok());
        assert!(SearchConfig::new(10, 10).validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let err = SearchConfig::new(100, 5).validate().unwrap_err();
        assert!(err.contains("at least 10"), "unexpected message: {err}");
    }

    #[test]
    fn test_validate_population_exceeds_bits() {
        assert!(SearchConfig::new(20, 21).validate().is_err());
    }

    #[test]
    fn test_validate_zero_bits() {
        assert!(SearchConfig::new(0, 10).validate().is_err());
    }

    #[test]
    fn test_validate_bits_over_sanity_bound() {
        assert!(SearchConfig::new(MAX_NB_BITS + 1, 100).validate().is_err());
        assert!(SearchConfig::new(MAX_NB_BITS, 100).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = SearchConfig::new(100, 20).with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_interval() {
        let config = SearchConfig::new(100, 20).with_progress_interval(0);
        assert!(config.validate().is_err());
    }
}
