//! Mutation: one uniformly random bit flip per individual.
//!
//! The current best individual is exempt, so the top of the ranking can
//! only improve between generations (elitism of one). Every other slot,
//! including the ones selection just rebuilt, flips exactly one bit.

use crate::population::Population;
use crate::rng::worker_stream;
use rand::Rng;
use rayon::prelude::*;

/// Flips one random bit in every individual except the ranked best.
///
/// Requires a valid `rank_order`. Each slot draws from its own stream
/// keyed by `(phase_seed, slot)`, so the outcome does not depend on
/// worker scheduling.
pub(crate) fn run(pop: &mut Population, phase_seed: u64, parallel: bool) {
    let best = pop.best_slot();
    let nb_bits = pop.nb_bits();
    let Population { individuals, .. } = pop;

    if parallel {
        individuals
            .par_iter_mut()
            .enumerate()
            .for_each(|(slot, bits)| {
                if slot != best {
                    let mut rng = worker_stream(phase_seed, slot);
                    bits.flip(rng.random_range(0..nb_bits));
                }
            });
    } else {
        for (slot, bits) in individuals.iter_mut().enumerate() {
            if slot != best {
                let mut rng = worker_stream(phase_seed, slot);
                bits.flip(rng.random_range(0..nb_bits));
            }
        }
    }
}
