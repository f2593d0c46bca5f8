use criterion::{black_box, BatchSize, Criterion};
use criterion::{criterion_group, criterion_main};

use chronopipe::{Edge, Pipeline, Timestamp};

const PACKAGES_PER_ITER: usize = 1_000;

// Fixed-seed LCG keeps the insertion pattern identical across runs.
fn random_stamps() -> Vec<Timestamp> {
    let mut state: u64 = 0x853C_49E6_748F_EA9B;
    (0..PACKAGES_PER_ITER)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            Timestamp::new(1_000 + (state % 60) as i64, (state % 900_000) as i64)
        })
        .collect()
}

fn filled_pipeline(stamps: &[Timestamp]) -> Pipeline<()> {
    let pipeline = Pipeline::new();
    for &stamp in stamps {
        pipeline.insert((), stamp).expect("insert");
    }
    pipeline
}

fn bench_pipeline(c: &mut Criterion) {
    let stamps = random_stamps();

    c.bench_function("insert_1k_random", |b| {
        b.iter_batched(
            || stamps.clone(),
            |stamps| {
                let pipeline = Pipeline::new();
                for stamp in stamps {
                    pipeline.insert(black_box(()), stamp).expect("insert");
                }
                pipeline
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("pop_oldest_1k", |b| {
        b.iter_batched(
            || filled_pipeline(&stamps),
            |pipeline| while pipeline.pop(Edge::Oldest).is_some() {},
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
