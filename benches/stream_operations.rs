use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lazy_stream::Stream;

fn bench_basic_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("basic_operations");

    for size in [1_000usize, 10_000, 100_000].iter() {
        group.bench_with_input(
            BenchmarkId::new("map_filter_collect", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let result = Stream::of(0..size)
                        .map(|x| black_box(x * 2))
                        .filter(|&x| black_box(x % 4 == 0))
                        .collect();
                    black_box(result)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("reduce", size), size, |b, &size| {
            b.iter(|| {
                let result = Stream::of(0..size).reduce(0u64, |acc, x| acc + x as u64);
                black_box(result)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("take_from_iterate", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let result = Stream::iterate(0u64, |x| x.wrapping_add(1)).take(size);
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

fn bench_deep_pipelines(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_pipelines");

    for depth in [1usize, 4, 16].iter() {
        group.bench_with_input(
            BenchmarkId::new("chained_maps", depth),
            depth,
            |b, &depth| {
                b.iter(|| {
                    let mut stream = Stream::of(0u64..10_000);
                    for _ in 0..depth {
                        stream.map(|x| black_box(x.wrapping_add(1)));
                    }
                    black_box(stream.collect())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_basic_operations, bench_deep_pipelines);
criterion_main!(benches);
