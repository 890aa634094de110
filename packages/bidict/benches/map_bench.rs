use std::collections::HashMap;

use bidict::{Bidict, OrderedBidict};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

const SIZE: u64 = 1024;

/// Two maps kept in sync by hand, the way a bidict would be written without this crate.
fn two_maps() -> (HashMap<u64, u64>, HashMap<u64, u64>) {
    let fwd = (0..SIZE).map(|i| (i, i + SIZE)).collect::<HashMap<_, _>>();
    let inv = fwd.iter().map(|(k, v)| (*v, *k)).collect::<HashMap<_, _>>();
    (fwd, inv)
}

fn bidict() -> Bidict<u64, u64> {
    (0..SIZE).map(|i| (i, i + SIZE)).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("two_maps::init", |b| b.iter(two_maps));
    c.bench_function("bidict::init", |b| b.iter(bidict));
    c.bench_function("ordered_bidict::init", |b| b.iter(|| (0..SIZE).map(|i| (i, i + SIZE)).collect::<OrderedBidict<u64, u64>>()));

    let (_fwd, inv) = two_maps();
    let map = bidict();
    c.bench_function("two_maps::get_by_value", |b| b.iter(|| inv.get(&(SIZE + 55))));
    c.bench_function("bidict::get_by_value", |b| b.iter(|| map.get_by_value(&(SIZE + 55))));

    c.bench_function("two_maps::insert", |b| {
        b.iter_batched(
            two_maps,
            |(mut fwd, mut inv)| {
                if !inv.contains_key(&0) {
                    if let Some(old) = fwd.insert(7, 0) {
                        inv.remove(&old);
                    }
                    inv.insert(0, 7);
                }
                (fwd, inv)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("bidict::insert", |b| {
        b.iter_batched(
            bidict,
            |mut map| {
                let _ = map.insert(7, 0);
                map
            },
            BatchSize::SmallInput,
        )
    });

    let items = (0..SIZE / 2).map(|i| (SIZE * 4 + i, SIZE * 8 + i)).collect::<Vec<_>>();
    c.bench_function("bidict::update", |b| {
        b.iter_batched(
            bidict,
            |mut map| {
                let _ = map.update(items.iter().copied());
                map
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
