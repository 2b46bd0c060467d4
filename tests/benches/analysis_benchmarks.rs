//! # Basket Graph Benchmarks
//!
//! | Operation | Expected cost |
//! |-----------|---------------|
//! | Graph build | O(sum of k^2) for baskets of k distinct items |
//! | BFS / DFS | O(V + E) within the depth bound |
//! | Merge sort | O(n log n) |
//! | Top bundles (size > 2) | O(sum of C(k, s)) subsets |

use basket_graph::algorithms::{build_graph, itemsets, merge_sort, traverse, TraversalLimits};
use basket_graph::TraversalStrategy;
use basket_tests::fixtures::synthetic_transactions;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

// ============================================================================
// Graph construction
// ============================================================================

fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph-build");
    group.measurement_time(Duration::from_secs(5));

    for count in [1_000, 10_000, 50_000] {
        let transactions = synthetic_transactions(count, 500, 8, 1);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("transactions", count), &transactions, |b, txs| {
            b.iter(|| black_box(build_graph(txs)))
        });
    }

    group.finish();
}

// ============================================================================
// Depth-limited search
// ============================================================================

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    let graph = build_graph(&synthetic_transactions(20_000, 1_000, 6, 2));

    for depth in [1, 2, 4] {
        for strategy in [TraversalStrategy::BreadthFirst, TraversalStrategy::DepthFirst] {
            let name = format!("{:?}", strategy);
            group.bench_with_input(BenchmarkId::new(name, depth), &depth, |b, &depth| {
                b.iter(|| {
                    black_box(traverse(&graph, "item-0000", strategy, TraversalLimits::depth(depth)))
                })
            });
        }
    }

    group.finish();
}

// ============================================================================
// Stable merge sort
// ============================================================================

fn bench_merge_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge-sort");
    let mut rng = StdRng::seed_from_u64(3);

    for size in [1_000, 10_000, 100_000] {
        let values: Vec<(u32, u64)> = (0..size).map(|i| (i, rng.gen_range(0..1_000))).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("descending", size), &values, |b, values| {
            b.iter(|| black_box(merge_sort(values, |v| v.1, true)))
        });
    }

    group.finish();
}

// ============================================================================
// Bundle mining
// ============================================================================

fn bench_top_bundles(c: &mut Criterion) {
    let mut group = c.benchmark_group("top-bundles");
    group.measurement_time(Duration::from_secs(5));

    let transactions = synthetic_transactions(10_000, 200, 8, 4);
    let graph = build_graph(&transactions);

    group.bench_function("pairs_from_graph", |b| {
        b.iter(|| black_box(itemsets::top_pair_bundles(&graph, 10)))
    });

    for size in [2, 3, 4] {
        group.bench_with_input(BenchmarkId::new("enumerated", size), &size, |b, &size| {
            b.iter(|| black_box(itemsets::top_bundles(&transactions, size, 10)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_graph_build,
    bench_traversal,
    bench_merge_sort,
    bench_top_bundles,
);

criterion_main!(benches);
