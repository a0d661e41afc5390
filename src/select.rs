//! Selection: rebuilds the worst quarter from the elite band.
//!
//! Each of the worst `population_size / 4` individuals is replaced bit by
//! bit: every position is copied from an independently redrawn donor among
//! the best `population_size / 10`. This is gene pool recombination over a
//! truncated elite, sampled per bit with replacement, so one replacement
//! generally mixes bits of several donors.
//!
//! Donors are never written during the phase, so any number of workers may
//! read them concurrently; each worker builds one replacement from a shared
//! view, and the replacements are committed to their slots only after the
//! join.
//!
//! # References
//!
//! - Mühlenbein & Schlierkamp-Voosen (1993), "Predictive Models for the
//!   Breeder Genetic Algorithm" (truncation selection)
//! - Mühlenbein & Voigt (1995), "Gene Pool Recombination in Genetic
//!   Algorithms"

use crate::bitvec::BitVec;
use crate::population::Population;
use crate::rng::worker_stream;
use rand::Rng;
use rayon::prelude::*;

/// Replaces the worst quarter of the population with per-bit resamples of
/// the elite band and returns the current best fitness (`0` means the
/// target has been matched exactly).
///
/// Requires a valid `rank_order` for the current fitness values. Fitness
/// entries of the replaced slots are left as evaluated before the pass;
/// the next evaluation refreshes them.
pub(crate) fn run(pop: &mut Population, phase_seed: u64, parallel: bool) -> u32 {
    let size = pop.len();
    let replace_count = size / 4;
    let donor_count = size / 10;
    debug_assert!(donor_count > 0, "population too small for a donor band");

    let view: &Population = pop;
    let build = |offset: usize| build_replacement(view, offset, donor_count, phase_seed);

    let replacements: Vec<(usize, BitVec)> = if parallel {
        (0..replace_count).into_par_iter().map(build).collect()
    } else {
        (0..replace_count).map(build).collect()
    };

    for (slot, bits) in replacements {
        pop.individuals[slot] = bits;
    }
    pop.best_fitness()
}

/// Builds the replacement for the destination at rank `size - 1 - offset`,
/// redrawing the donor rank uniformly from the elite band for every bit
/// position.
fn build_replacement(
    pop: &Population,
    offset: usize,
    donor_count: usize,
    phase_seed: u64,
) -> (usize, BitVec) {
    let mut rng = worker_stream(phase_seed, offset);
    let nb_bits = pop.nb_bits();
    let dest_slot = pop.rank_order[pop.len() - 1 - offset];

    let mut bits = BitVec::zeros(nb_bits);
    for pos in 0..nb_bits {
        let donor_slot = pop.rank_order[rng.random_range(0..donor_count)];
        bits.set(pos, pop.individuals[donor_slot].get(pos));
    }
    (dest_slot, bits)
}
