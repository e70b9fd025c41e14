#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use bucketry::{ChainingMap, OpenAddressingMap, find_mode, hash_function_2};
use criterion::{Criterion, criterion_group, criterion_main};
use proptest::{
    collection::vec,
    strategy::{Strategy, ValueTree},
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn random_items(runner: &mut TestRunner) -> Vec<(String, String)> {
    vec(("[a-z0-9]{4,12}", "[a-z]{1,8}"), ITEMS_AMOUNT).new_tree(runner).unwrap().current()
}

fn hash_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = random_items(&mut runner);

    let mut group = c.benchmark_group("Hash map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut open_map = OpenAddressingMap::new(11, hash_function_2);
    let mut chaining_map = ChainingMap::new(ITEMS_AMOUNT, hash_function_2);
    let mut rust_map = HashMap::new();
    group.bench_function("open addressing put", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                open_map.put(key, value);
            }
        });
    });
    group.bench_function("chaining put", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                chaining_map.put(key, value);
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
    group.bench_function("open addressing get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = open_map.get(key);
            }
        });
    });
    group.bench_function("chaining get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = chaining_map.get(key);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });
    group.finish();
}

fn find_mode_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let values: Vec<String> =
        random_items(&mut runner).into_iter().map(|(_, value)| value).collect();

    c.bench_function("find mode", |b| b.iter(|| find_mode(&values)));
}

criterion_group!(benches, hash_map_benches, find_mode_benches);

criterion_main!(benches);
