use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use sortlab::prelude::*;
use std::hint::black_box;
use std::time::Duration;

fn bench_1m_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M Integers");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(60));

    // Dataset generation, small values as in the native comparison
    let mut rng = rand::rng();
    let count = 1_000_000;
    let input: Vec<u64> = (0..count).map(|_| rng.random_range(0..10_000)).collect();

    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("radix_sort (16384 buckets)", |b| {
        b.iter_batched(
            || input.clone(),
            |data| radix_sort_with_buckets(black_box(data), 16384),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("merge_sort", |b| {
        b.iter_batched(
            || input.clone(),
            |data| merge_sort(black_box(data)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_1m_integers);
criterion_main!(benches);
