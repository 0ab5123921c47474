use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    BatchSize,
    BenchmarkId,
    Criterion,
};
use rand::{
    seq::SliceRandom,
    thread_rng,
};
use skipset::SkipSet;

fn shuffled(size: u64) -> Vec<u64> {
    let mut values: Vec<u64> = (0..size).collect();
    values.shuffle(&mut thread_rng());
    values
}

pub fn insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipSet::insert()");
    for size in [1_000u64, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || shuffled(size),
                |values| {
                    let mut set = SkipSet::new();
                    for v in values {
                        set.insert(v);
                    }
                    set
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

pub fn contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipSet::contains()");
    for size in [1_000u64, 10_000, 100_000] {
        let set: SkipSet<u64> = shuffled(size).into_iter().collect();
        let probes = shuffled(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                for p in probes.iter() {
                    black_box(set.contains(p));
                }
            })
        });
    }
    group.finish();
}

pub fn delete_min(c: &mut Criterion) {
    c.bench_function("SkipSet::delete_min() 10k", |b| {
        b.iter_batched(
            || shuffled(10_000).into_iter().collect::<SkipSet<u64>>(),
            |mut set| {
                while let Some(v) = set.try_delete_min() {
                    black_box(v);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

pub fn iter(c: &mut Criterion) {
    let set: SkipSet<u64> = shuffled(100_000).into_iter().collect();
    c.bench_function("SkipSet::iter() 100k", |b| {
        b.iter(|| black_box(set.iter().sum::<u64>()))
    });
}

criterion_group!(benches, insert, contains, delete_min, iter);
criterion_main!(benches);
