//! Fitness evaluation: Hamming distance to the hidden target.
//!
//! Every slot is independent: the pass reads the shared bit arrays and
//! writes only its own fitness cell, so the parallel branch is a plain
//! data-parallel map over disjoint output slots.

use crate::population::Population;
use rayon::prelude::*;

/// Recomputes `fitness[slot]` for every slot.
pub(crate) fn run(pop: &mut Population, parallel: bool) {
    let Population {
        target,
        individuals,
        fitness,
        ..
    } = pop;
    let target = &*target;
    let individuals = individuals.as_slice();

    if parallel {
        fitness.par_iter_mut().enumerate().for_each(|(slot, out)| {
            *out = individuals[slot].hamming(target);
        });
    } else {
        for (slot, out) in fitness.iter_mut().enumerate() {
            *out = individuals[slot].hamming(target);
        }
    }
}
