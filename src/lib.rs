//! Parallel evolutionary search over packed bit strings.
//!
//! Evolves a population of fixed-length bit vectors toward a hidden random
//! target. Fitness is the Hamming distance to the target, computed by XOR
//! and popcount over 64-bit words, so a fitness of zero means an exact
//! match.
//!
//! # Key Types
//!
//! - [`BitVec`]: Packed bit vector with XOR, popcount, and Hamming distance
//! - [`SearchConfig`]: Search parameters (problem size, budget, seeding)
//! - [`SearchRunner`]: Executes the generation loop
//! - [`SearchResult`]: Final state with statistics and the full population
//! - [`write_report`]: Plain-text dump of a finished search
//!
//! # Algorithm
//!
//! Each generation evaluates every individual, ranks the population by
//! fitness, rebuilds the worst quarter bit-by-bit from donors drawn out of
//! the best tenth, then flips one random bit in every individual except
//! the current best. The loop stops when an individual matches the target
//! exactly or the generation budget runs out.
//!
//! # Parallelism and reproducibility
//!
//! Evaluation, selection, and mutation fan out over rayon's worker pool;
//! a `parallel: false` config runs the same code on one thread. Every
//! parallel task draws from its own seeded stream, so a seeded run
//! produces identical results at any thread count.
//!
//! # Example
//!
//! ```
//! use bitevo::{SearchConfig, SearchRunner, Termination};
//!
//! let config = SearchConfig::new(128, 30)
//!     .with_seed(7)
//!     .with_max_generations(10_000);
//! let result = SearchRunner::run(&config);
//! if result.termination == Termination::Found {
//!     assert_eq!(result.best(), result.population.target());
//! }
//! ```

mod bitvec;
mod config;
mod evaluate;
mod mutate;
mod population;
mod rank;
mod report;
mod rng;
mod runner;
mod select;

pub use bitvec::BitVec;
pub use config::{SearchConfig, MAX_NB_BITS, MIN_POPULATION};
pub use population::Population;
pub use report::write_report;
pub use runner::{Progress, SearchResult, SearchRunner, Termination};
