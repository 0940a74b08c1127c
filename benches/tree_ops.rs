use algo::list_gen::generate_list;
use algo::structs::RedBlackTree;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::BTreeSet;

fn new_tree() -> RedBlackTree<u64, fn(&u64, &u64) -> bool> {
    RedBlackTree::new(|a, b| a < b)
}

/// Sequential inserts, where rebalancing does the most work
fn bench_insert_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_sequential");

    for size in [1_000u64, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("RedBlackTree", size), size, |b, &size| {
            b.iter(|| {
                let tree = new_tree();
                for i in 0..size {
                    tree.insert(i);
                }
                black_box(tree.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), size, |b, &size| {
            b.iter(|| {
                let mut btree = BTreeSet::new();
                for i in 0..size {
                    btree.insert(i);
                }
                black_box(btree.len())
            });
        });
    }

    group.finish();
}

fn bench_insert_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_random");

    for size in [1_000usize, 10_000, 100_000].iter() {
        let values = generate_list(*size, 0, 1_000_000_000);

        group.bench_with_input(BenchmarkId::new("RedBlackTree", size), &values, |b, values| {
            b.iter(|| {
                let tree = RedBlackTree::new(|a: &i64, b: &i64| a < b);
                for v in values {
                    tree.insert(*v);
                }
                black_box(tree.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &values, |b, values| {
            b.iter(|| {
                let mut btree = BTreeSet::new();
                for v in values {
                    btree.insert(*v);
                }
                black_box(btree.len())
            });
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [1_000u64, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("RedBlackTree_hit", size), size, |b, &size| {
            let tree = new_tree();
            for i in 0..size {
                tree.insert(i);
            }
            let probe = size / 2;
            b.iter(|| black_box(tree.search(&probe)));
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet_hit", size), size, |b, &size| {
            let btree: BTreeSet<u64> = (0..size).collect();
            let probe = size / 2;
            b.iter(|| black_box(btree.contains(&probe)));
        });

        group.bench_with_input(BenchmarkId::new("RedBlackTree_miss", size), size, |b, &size| {
            let tree = new_tree();
            for i in 0..size {
                tree.insert(i);
            }
            let probe = size + 1_000;
            b.iter(|| black_box(tree.search(&probe)));
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet_miss", size), size, |b, &size| {
            let btree: BTreeSet<u64> = (0..size).collect();
            let probe = size + 1_000;
            b.iter(|| black_box(btree.contains(&probe)));
        });
    }

    group.finish();
}

fn bench_in_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("in_order");

    for size in [1_000u64, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("RedBlackTree", size), size, |b, &size| {
            let tree = new_tree();
            for i in 0..size {
                tree.insert(i);
            }
            b.iter(|| {
                let mut sum = 0u64;
                tree.in_order(|v| sum += v);
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), size, |b, &size| {
            let btree: BTreeSet<u64> = (0..size).collect();
            b.iter(|| black_box(btree.iter().sum::<u64>()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_sequential,
    bench_insert_random,
    bench_search,
    bench_in_order,
);
criterion_main!(benches);
