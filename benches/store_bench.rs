//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stepmap::IntervalStore;

fn populated(boundaries: i64) -> IntervalStore<i64, u32> {
    let mut store = IntervalStore::new(0);
    for i in 0..boundaries {
        store
            .assign(i * 10, i * 10 + 5, (i % 7 + 1) as u32)
            .expect("assignment succeeds");
    }
    store
}

fn benchmark_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    for size in [100i64, 10_000] {
        let store = populated(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| {
                let key = rng.gen_range(0..size * 10);
                black_box(store.lookup(&key));
            });
        });
    }
    group.finish();
}

fn benchmark_assign(c: &mut Criterion) {
    c.bench_function("assign_random_ranges", |b| {
        let mut store = IntervalStore::new(0u32);
        let mut rng = StdRng::seed_from_u64(2);
        b.iter(|| {
            let begin = rng.gen_range(0..100_000i64);
            let end = begin + rng.gen_range(1..500);
            let value = rng.gen_range(1..8u32);
            let _ = black_box(store.assign(begin, end, value));
        });
    });
}

criterion_group!(benches, benchmark_lookup, benchmark_assign);
criterion_main!(benches);
