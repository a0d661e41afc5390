//! Search loop execution.
//!
//! [`SearchRunner`] orchestrates the complete search:
//! generation → evaluation → ranking → selection → mutation → repeat,
//! until an individual matches the hidden target exactly or the
//! generation budget runs out.

use crate::bitvec::BitVec;
use crate::config::SearchConfig;
use crate::population::Population;
use crate::{evaluate, mutate, rank, select};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// An individual reached Hamming distance zero to the target.
    Found,

    /// The configured generation budget was exhausted first.
    GenerationLimit,
}

/// Snapshot handed to the progress callback every
/// [`progress_interval`](SearchConfig::with_progress_interval) generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    /// Completed mutation rounds so far.
    pub generation: usize,

    /// Best Hamming distance before this round's mutation.
    pub best_fitness: u32,
}

/// Result of a search run.
///
/// Contains the final population along with statistics about the loop.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Why the loop stopped.
    pub termination: Termination,

    /// Completed mutation rounds. Equals the configured maximum when the
    /// budget ran out.
    pub generations: usize,

    /// Best Hamming distance at exit (`0` iff `termination` is
    /// [`Termination::Found`]).
    pub best_fitness: u32,

    /// Best fitness sampled at each progress interval, oldest first.
    pub best_history: Vec<u32>,

    /// Final population. Its rank order reflects the last ranking pass;
    /// fitness entries of slots rebuilt by the final selection are as
    /// evaluated before that rebuild.
    pub population: Population,
}

impl SearchResult {
    /// The best individual found. When `termination` is
    /// [`Termination::Found`] this is an exact copy of the target.
    pub fn best(&self) -> &BitVec {
        self.population.individual(self.population.best_slot())
    }
}

/// Executes the search loop.
///
/// # Usage
///
/// ```
/// use bitevo::{SearchConfig, SearchRunner, Termination};
///
/// let config = SearchConfig::new(256, 40)
///     .with_seed(42)
///     .with_max_generations(20_000);
/// let result = SearchRunner::run(&config);
/// if result.termination == Termination::Found {
///     assert_eq!(result.best(), result.population.target());
/// }
/// ```
pub struct SearchRunner;

impl SearchRunner {
    /// Runs the search.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`SearchConfig::validate`] first to get a descriptive error).
    pub fn run(config: &SearchConfig) -> SearchResult {
        Self::run_with_progress(config, |_| {})
    }

    /// Runs the search, invoking `on_progress` every
    /// `progress_interval` completed generations with the best fitness
    /// of the round that just finished.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`SearchConfig::validate`] first to get a descriptive error).
    pub fn run_with_progress<F>(config: &SearchConfig, mut on_progress: F) -> SearchResult
    where
        F: FnMut(Progress),
    {
        config.validate().expect("invalid SearchConfig");

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::seed_from_u64(rand::random()),
        };

        let mut population = Population::generate(config, &mut rng);
        let mut best_history =
            Vec::with_capacity(config.max_generations / config.progress_interval);
        let mut generation = 0usize;

        let (termination, best_fitness) = loop {
            evaluate::run(&mut population, config.parallel);
            rank::run(&mut population);
            let best = select::run(&mut population, rng.random(), config.parallel);

            if best == 0 {
                break (Termination::Found, 0);
            }
            if generation >= config.max_generations {
                break (Termination::GenerationLimit, best);
            }

            mutate::run(&mut population, rng.random(), config.parallel);
            generation += 1;

            if generation % config.progress_interval == 0 {
                best_history.push(best);
                on_progress(Progress {
                    generation,
                    best_fitness: best,
                });
            }
        };

        SearchResult {
            termination,
            generations: generation,
            best_fitness,
            best_history,
            population,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
