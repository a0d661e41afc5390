//! Population state: individuals, fitness scores, and rank order.
//!
//! Individuals are identified by their slot index for the whole run and are
//! never physically reordered; ranking is expressed through the separate
//! `rank_order` permutation so that slot-indexed fitness data stays aligned
//! with the bit arrays it describes.

use crate::bitvec::BitVec;
use crate::config::SearchConfig;
use rand::Rng;

/// A population of candidate bit vectors together with the hidden target.
///
/// Holds one fitness score per slot (the Hamming distance to the target as
/// of the last evaluation pass) and `rank_order`, a permutation of slot
/// indices ordered best-to-worst.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    pub(crate) target: BitVec,
    pub(crate) individuals: Vec<BitVec>,
    pub(crate) fitness: Vec<u32>,
    pub(crate) rank_order: Vec<usize>,
}

impl Population {
    /// Generates the starting state for a run: a hidden target with
    /// `nb_bits / 5` set bits at random positions, and one individual per
    /// slot with a uniformly drawn number of set bits, also at random
    /// positions. Fitness starts at zero and `rank_order` at the identity;
    /// both are meaningful only after the first evaluation and ranking.
    ///
    /// `config` must have passed [`SearchConfig::validate`].
    pub(crate) fn generate<R: Rng + ?Sized>(config: &SearchConfig, rng: &mut R) -> Self {
        debug_assert!(config.validate().is_ok());
        let nb_bits = config.nb_bits;
        let target = BitVec::random_with_ones(nb_bits, nb_bits / 5, rng);
        let individuals = (0..config.population_size)
            .map(|_| {
                let ones = rng.random_range(0..nb_bits);
                BitVec::random_with_ones(nb_bits, ones, rng)
            })
            .collect();
        Self {
            target,
            individuals,
            fitness: vec![0; config.population_size],
            rank_order: (0..config.population_size).collect(),
        }
    }

    /// Builds a population from explicit individuals, for driving single
    /// phases over crafted states.
    #[cfg(test)]
    pub(crate) fn from_parts(target: BitVec, individuals: Vec<BitVec>) -> Self {
        let size = individuals.len();
        Self {
            target,
            individuals,
            fitness: vec![0; size],
            rank_order: (0..size).collect(),
        }
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the population holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Length of every bit vector in the population.
    pub fn nb_bits(&self) -> usize {
        self.target.len()
    }

    /// The hidden target vector.
    pub fn target(&self) -> &BitVec {
        &self.target
    }

    /// The individual at `slot`.
    pub fn individual(&self, slot: usize) -> &BitVec {
        &self.individuals[slot]
    }

    /// The fitness of the individual at `slot`, as of the last
    /// evaluation pass.
    pub fn fitness(&self, slot: usize) -> u32 {
        self.fitness[slot]
    }

    /// The rank permutation: `rank_order()[0]` is the best slot.
    pub fn rank_order(&self) -> &[usize] {
        &self.rank_order
    }

    /// Slot index of the best-ranked individual.
    pub fn best_slot(&self) -> usize {
        self.rank_order[0]
    }

    /// Fitness of the best-ranked individual.
    pub fn best_fitness(&self) -> u32 {
        self.fitness[self.rank_order[0]]
    }

    /// Iterates over `(slot, bits, fitness)` in rank order, best first.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &BitVec, u32)> + '_ {
        self.rank_order
            .iter()
            .map(move |&slot| (slot, &self.individuals[slot], self.fitness[slot]))
    }
}
