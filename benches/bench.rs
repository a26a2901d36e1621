mod models;
use models::*;

use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use sorted_keyed_array::SortedArray;

const COUNTS: [usize; 2] = [1000, 10000];

fn entry_key(e: &Entry) -> f64 {
    e.point.key()
}

fn shuffled(count: usize) -> Vec<usize> {
    let mut idx = (0..count).collect::<Vec<_>>();
    idx.shuffle(&mut rand::thread_rng());
    idx
}

fn benchmark_sorted_array(c: &mut Criterion) {
    for count in COUNTS {
        c.bench_function(format!("sorted_array insert {count}").as_str(), |b| {
            let order = shuffled(count);
            b.iter(|| {
                let mut arr = SortedArray::new(entry_key);
                for i in order.iter() {
                    arr.insert(Entry::new(*i));
                }
            });
        });

        c.bench_function(format!("sorted_array build {count}").as_str(), |b| {
            let entries = shuffled(count)
                .into_iter()
                .map(Entry::new)
                .collect::<Vec<_>>();
            b.iter(|| SortedArray::from_slice(entry_key, &entries));
        });

        c.bench_function(format!("sorted_array range {count}").as_str(), |b| {
            let arr = SortedArray::from_iter_with(entry_key, (0..count).map(Entry::new));
            b.iter(|| {
                for i in (0..count).step_by(16) {
                    let (start, end) =
                        arr.range_inclusive(&black_box(i as f64), &black_box((i + 32) as f64));
                    assert!(start <= end);
                }
            });
        });

        c.bench_function(format!("sorted_array remove_range {count}").as_str(), |b| {
            let arr = SortedArray::from_iter_with(entry_key, (0..count).map(Entry::new));
            b.iter(|| {
                let mut arr = arr.clone();
                for i in (0..count).step_by(8) {
                    arr.remove_range_inclusive(&(i as f64), &((i + 7) as f64));
                }
                assert!(arr.is_empty());
            });
        });

        c.bench_function(format!("sorted_array iter {count}").as_str(), |b| {
            let arr = SortedArray::from_iter_with(entry_key, (0..count).map(Entry::new));
            b.iter(|| {
                let c = arr.iter().fold(0, |a, _i| a + black_box(1));
                assert_eq!(c, arr.len());
            });
        });
    }
}

fn benchmark_btree(c: &mut Criterion) {
    // f64 isn't Ord, key the map by the integer part
    for count in COUNTS {
        c.bench_function(format!("btree insert {count}").as_str(), |b| {
            let order = shuffled(count);
            b.iter(|| {
                let mut tree = BTreeMap::<u64, Vec<Entry>>::new();
                for i in order.iter() {
                    let e = Entry::new(*i);
                    tree.entry(e.point.key() as u64).or_default().push(e);
                }
            });
        });

        c.bench_function(format!("btree range {count}").as_str(), |b| {
            let mut tree = BTreeMap::<u64, Vec<Entry>>::new();
            for i in 0..count {
                let e = Entry::new(i);
                tree.entry(e.point.key() as u64).or_default().push(e);
            }
            b.iter(|| {
                for i in (0..count as u64).step_by(16) {
                    let n = tree.range(black_box(i)..=black_box(i + 32)).count();
                    assert!(n <= 33);
                }
            });
        });
    }
}

criterion_group!(benches, benchmark_sorted_array, benchmark_btree);
criterion_main!(benches);
