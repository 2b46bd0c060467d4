//! Frequent Itemset Mining
//!
//! Counts how many transactions contain each bundle of items and ranks the
//! results through the stable merge sort. Counters are keyed by the sorted
//! item tuple, and ranking starts from that canonical order, so bundles with
//! equal frequency always come out in lexicographic order.

use super::ranking::{merge_sort, sort_associations_by_weight};
use super::search::bfs;
use crate::domain::errors::AnalysisError;
use crate::domain::graph::Graph;
use crate::domain::value_objects::{Association, Bundle, BundleFrequency, Item, Transaction, Weight};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Top `k` bundles of exactly `bundle_size` items across `transactions`.
///
/// Frequency is the number of transactions containing every item of the
/// bundle. Transactions with an empty identifier are ignored, as the graph
/// builder ignores them. Fewer than `k` results are returned when fewer
/// bundles exist.
pub fn top_bundles(
    transactions: &[Transaction],
    bundle_size: usize,
    k: usize,
) -> Result<Vec<BundleFrequency>, AnalysisError> {
    validate_request(bundle_size, k)?;

    let mut counts: BTreeMap<Vec<&Item>, Weight> = BTreeMap::new();
    let mut skipped = 0usize;
    for tx in transactions {
        if tx.is_malformed() {
            skipped += 1;
            continue;
        }
        let pool: Vec<&Item> = tx
            .distinct_items()
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        for_each_combination(&pool, bundle_size, |combo| {
            *counts.entry(combo.to_vec()).or_insert(0) += 1;
        });
    }
    debug!(
        bundle_size,
        skipped,
        distinct_bundles = counts.len(),
        "Bundles counted"
    );

    let by_key = counts
        .into_iter()
        .map(|(items, frequency)| BundleFrequency {
            bundle: Bundle::from_sorted(items.into_iter().cloned().collect()),
            frequency,
        })
        .collect();
    Ok(rank(by_key, k))
}

/// Top `k` item pairs read straight from the graph's edge weights.
/// Agrees with `top_bundles(transactions, 2, k)` for the graph built from
/// the same transactions.
pub fn top_pair_bundles(graph: &Graph, k: usize) -> Result<Vec<BundleFrequency>, AnalysisError> {
    validate_request(2, k)?;
    Ok(rank(pairs_by_key(graph, 1), k))
}

/// Every pair bought together at least `min_frequency` times, most frequent first
pub fn frequent_pairs(graph: &Graph, min_frequency: Weight) -> Vec<BundleFrequency> {
    rank(pairs_by_key(graph, min_frequency), usize::MAX)
}

/// Direct co-purchase partners of `item` with weight >= `min_frequency`,
/// heaviest first, cut to `limit` when given.
pub fn items_bought_with(
    graph: &Graph,
    item: &str,
    min_frequency: Weight,
    limit: Option<usize>,
) -> Result<Vec<Association>, AnalysisError> {
    if !graph.has_item(item) {
        return Err(AnalysisError::not_found(item));
    }

    let partners: Vec<Association> = graph
        .neighbors(item)
        .filter(|&(_, weight)| weight >= min_frequency)
        .map(|(neighbor, weight)| Association::new(neighbor.clone(), weight))
        .collect();

    let mut ranked = sort_associations_by_weight(&partners, true);
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    Ok(ranked)
}

/// Top `n` items within `max_depth` hops of `item` that also share a direct
/// edge with it, ranked by that edge's weight. Ties keep BFS order.
pub fn top_associations(
    graph: &Graph,
    item: &str,
    n: usize,
    max_depth: usize,
) -> Result<Vec<Association>, AnalysisError> {
    let reachable = bfs(graph, item, max_depth)?;

    let associations: Vec<Association> = reachable
        .into_iter()
        .filter(|visited| visited.depth > 0)
        .filter_map(|visited| {
            graph
                .edge_weight(item, visited.item.as_str())
                .map(|weight| Association::new(visited.item, weight))
        })
        .collect();

    let mut ranked = sort_associations_by_weight(&associations, true);
    ranked.truncate(n);
    Ok(ranked)
}

fn validate_request(bundle_size: usize, k: usize) -> Result<(), AnalysisError> {
    if bundle_size < 2 {
        return Err(AnalysisError::InvalidInput(format!(
            "bundle_size must be >= 2, got {}",
            bundle_size
        )));
    }
    if k < 1 {
        return Err(AnalysisError::InvalidInput(format!(
            "k must be >= 1, got {}",
            k
        )));
    }
    Ok(())
}

fn pairs_by_key(graph: &Graph, min_frequency: Weight) -> Vec<BundleFrequency> {
    let counts: BTreeMap<Bundle, Weight> = graph
        .edges()
        .into_iter()
        .filter(|edge| edge.weight >= min_frequency)
        .map(|edge| {
            let (a, b) = if edge.a < edge.b {
                (edge.a, edge.b)
            } else {
                (edge.b, edge.a)
            };
            (Bundle::from_sorted(vec![a.clone(), b.clone()]), edge.weight)
        })
        .collect();

    counts
        .into_iter()
        .map(|(bundle, frequency)| BundleFrequency { bundle, frequency })
        .collect()
}

/// `by_key` must already be in canonical key order; the stable sort keeps
/// that order among equal frequencies.
fn rank(by_key: Vec<BundleFrequency>, k: usize) -> Vec<BundleFrequency> {
    let mut ranked = merge_sort(&by_key, |b| b.frequency, true);
    ranked.truncate(k);
    ranked
}

/// Visit every `size`-element combination of `pool` in lexicographic index order
fn for_each_combination<T: Copy>(pool: &[T], size: usize, mut visit: impl FnMut(&[T])) {
    let n = pool.len();
    if size == 0 || size > n {
        return;
    }

    let mut indices: Vec<usize> = (0..size).collect();
    let mut combo: Vec<T> = Vec::with_capacity(size);
    loop {
        combo.clear();
        combo.extend(indices.iter().map(|&i| pool[i]));
        visit(&combo);

        let Some(pos) = (0..size).rev().find(|&i| indices[i] < n - size + i) else {
            return;
        };
        indices[pos] += 1;
        for j in (pos + 1)..size {
            indices[j] = indices[j - 1] + 1;
        }
    }
}
