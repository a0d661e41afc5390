//! Criterion benchmarks for the bit-string search.
//!
//! Measures the XOR/popcount distance kernel on its own and full search
//! runs at several problem sizes, sequential vs parallel.

use bitevo::{BitVec, SearchConfig, SearchRunner};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ===========================================================================
// Hamming-distance kernel
// ===========================================================================

fn random_bits(len: usize, rng: &mut SmallRng) -> BitVec {
    let ones = rng.random_range(0..len);
    BitVec::random_with_ones(len, ones, rng)
}

fn bench_hamming(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming");
    let mut rng = SmallRng::seed_from_u64(42);

    for &len in &[1_000usize, 100_000, 1_000_000] {
        let pair = (random_bits(len, &mut rng), random_bits(len, &mut rng));
        group.bench_with_input(BenchmarkId::from_parameter(len), &pair, |bench, (a, b)| {
            bench.iter(|| black_box(a).hamming(black_box(b)))
        });
    }
    group.finish();
}

// ===========================================================================
// Full search runs
// ===========================================================================

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let instances = [
        SearchConfig::new(1_000, 40).with_max_generations(200),
        SearchConfig::benchmark().with_max_generations(100),
    ];
    for base in instances {
        for parallel in [false, true] {
            let config = base.clone().with_seed(42).with_parallel(parallel);
            let mode = if parallel { "par" } else { "seq" };
            group.bench_with_input(
                BenchmarkId::new(
                    format!("b{}_p{}_{}", config.nb_bits, config.population_size, mode),
                    config.nb_bits,
                ),
                &config,
                |bench, cfg| {
                    bench.iter(|| {
                        let result = SearchRunner::run(black_box(cfg));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_hamming, bench_search);
criterion_main!(benches);
