use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vgen::{fill, fill_threaded, fill_with_seed, ChunkPlan};

const SOURCE: [i64; 9] = [1, 5_566_789_809, 3, 5, 6, 7, 8, 9, 0];

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");
    let sizes = [1_000, 100_000, 1_000_000];

    for &size in &sizes {
        group.bench_function(format!("clock_seeded_n{}", size), |b| {
            b.iter(|| {
                black_box(fill(black_box(&SOURCE[..]), black_box(size)).is_ok());
            })
        });
    }

    for &size in &sizes {
        group.bench_function(format!("fixed_seed_n{}", size), |b| {
            b.iter(|| {
                black_box(fill_with_seed(black_box(&SOURCE[..]), black_box(size), 7).is_ok());
            })
        });
    }
    group.finish();
}

fn bench_fill_threaded(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_threaded");
    let size = 1_000_000;

    for &threads in &[1, 2, 4, 8, 16] {
        group.bench_function(format!("n{}_t{}", size, threads), |b| {
            b.iter(|| {
                black_box(fill_threaded(black_box(&SOURCE[..]), size, black_box(threads)).is_ok());
            })
        });
    }
    group.finish();
}

fn bench_chunk_plan(c: &mut Criterion) {
    c.bench_function("chunk_plan_n4294967295_t16", |b| {
        b.iter(|| ChunkPlan::new(black_box(4_294_967_295), black_box(16)))
    });
}

criterion_group!(benches, bench_fill, bench_fill_threaded, bench_chunk_plan);
criterion_main!(benches);
