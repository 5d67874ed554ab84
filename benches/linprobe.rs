#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::{collections::HashMap, hint::black_box};

use criterion::{Criterion, criterion_group, criterion_main};
use linprobe::LinearProbingMap;
use proptest::{
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = any::<[(String, String); ITEMS_AMOUNT]>()
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Hash map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut linear_map = LinearProbingMap::new();
    let mut rust_map = HashMap::new();
    group.bench_function("linear probing put", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                linear_map.put(key, value);
            }
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }
        });
    });
    group.bench_function("linear probing get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                black_box(linear_map.get(key).is_ok());
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                black_box(rust_map.get(key).is_some());
            }
        });
    });
    group.bench_function("linear probing remove and put", |b| {
        b.iter(|| {
            for (key, value) in items.iter().take(ITEMS_AMOUNT / 2) {
                if let Ok(old) = linear_map.remove(key) {
                    linear_map.put(key.clone(), old);
                } else {
                    linear_map.put(key.clone(), value.clone());
                }
            }
        });
    });
    group.finish();
}

criterion_group!(benches, hash_map_benches);

criterion_main!(benches);
