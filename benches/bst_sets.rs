#[macro_use]
extern crate criterion;
extern crate rand;
extern crate randomized_bst;

use criterion::{black_box, Criterion};
use rand::Rng;
use randomized_bst::randomized_tree::RandomizedSet;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: u32 = 1000;

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_randomized_set_insert(c: &mut Criterion) {
    c.bench_function("bench randomized set insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = RandomizedSet::with_rng(rng.clone());
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_randomized_set_insert_sorted(c: &mut Criterion) {
    c.bench_function("bench randomized set insert sorted", |b| {
        b.iter(|| {
            let rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = RandomizedSet::with_rng(rng);
            for key in 0..NUM_OF_OPERATIONS {
                set.insert(key);
            }
        })
    });
}

fn bench_randomized_set_contains(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = RandomizedSet::with_rng(rng.clone());
    let mut keys = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        set.insert(key);
        keys.push(key);
    }

    c.bench_function("bench randomized set contains", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

fn bench_randomized_set_remove(c: &mut Criterion) {
    c.bench_function("bench randomized set remove", |b| {
        b.iter(|| {
            let rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = RandomizedSet::with_rng(rng);
            for key in 0..NUM_OF_OPERATIONS {
                set.insert(key);
            }
            for key in 0..NUM_OF_OPERATIONS {
                black_box(set.remove(&key));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreeset_insert,
    bench_randomized_set_insert,
    bench_randomized_set_insert_sorted,
    bench_randomized_set_contains,
    bench_randomized_set_remove
);
criterion_main!(benches);
