//! Ranking: orders slot indices by ascending fitness.

use crate::population::Population;

/// Rebuilds `rank_order` so that `fitness[rank_order[i]]` is ascending.
///
/// Ties break by slot index, which makes the order a strict total order:
/// the result depends only on the current fitness values, never on the
/// permutation left behind by the previous generation.
pub(crate) fn run(pop: &mut Population) {
    let Population {
        fitness, rank_order, ..
    } = pop;
    rank_order.sort_by_key(|&slot| (fitness[slot], slot));
}
