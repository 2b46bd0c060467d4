//! Stable Merge Sort
//!
//! The single ordering primitive behind every ranking in this crate.
//! O(n log n) comparisons in the worst case, stable, and non-mutating: the
//! input slice is cloned into owned runs that are split at the midpoint,
//! sorted recursively and merged back, taking from the left run on ties.

use crate::domain::errors::AnalysisError;
use crate::domain::graph::Graph;
use crate::domain::value_objects::{Association, BundleFrequency, Item};
use std::cmp::Ordering;
use std::convert::Infallible;

/// Sort by a key extracted from each record.
///
/// Records with equal keys keep their input order regardless of `descending`.
pub fn merge_sort<T, K, F>(items: &[T], key: F, descending: bool) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    merge_sort_by(items, |a, b| directed(key(a).cmp(&key(b)), descending))
}

/// Sort with an explicit comparator. `Ordering::Equal` keeps input order.
pub fn merge_sort_by<T, F>(items: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    match try_merge_sort_by(items, |a, b| Ok::<_, Infallible>(compare(a, b))) {
        Ok(sorted) => sorted,
        Err(never) => match never {},
    }
}

/// Sort by a partially ordered key such as `f64`.
///
/// Fails with `InvalidInput` as soon as two keys cannot be compared
/// (for instance a NaN against any number).
pub fn try_merge_sort_by_key<T, K, F>(
    items: &[T],
    key: F,
    descending: bool,
) -> Result<Vec<T>, AnalysisError>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    try_merge_sort_by(items, |a, b| {
        key(a)
            .partial_cmp(&key(b))
            .map(|ordering| directed(ordering, descending))
            .ok_or_else(|| AnalysisError::InvalidInput("sort keys are not comparable".to_string()))
    })
}

/// Sort with a fallible comparator; the first comparator error aborts the sort.
pub fn try_merge_sort_by<T, E, F>(items: &[T], mut compare: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    sort_run(items.to_vec(), &mut compare)
}

fn sort_run<T, E, F>(mut run: Vec<T>, compare: &mut F) -> Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    if run.len() <= 1 {
        return Ok(run);
    }

    let right = run.split_off(run.len() / 2);
    let left = sort_run(run, compare)?;
    let right = sort_run(right, compare)?;
    merge(left, right, compare)
}

fn merge<T, E, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        // Only a strictly greater left element yields to the right run
        let next = if compare(l, r)? == Ordering::Greater {
            right.next()
        } else {
            left.next()
        };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    Ok(merged)
}

fn directed(ordering: Ordering, descending: bool) -> Ordering {
    if descending {
        ordering.reverse()
    } else {
        ordering
    }
}

/// Rank associations by co-purchase weight
pub fn sort_associations_by_weight(associations: &[Association], descending: bool) -> Vec<Association> {
    merge_sort(associations, |a| a.weight, descending)
}

/// Rank bundles by frequency
pub fn sort_bundles_by_frequency(bundles: &[BundleFrequency], descending: bool) -> Vec<BundleFrequency> {
    merge_sort(bundles, |b| b.frequency, descending)
}

/// Rank every item of the graph by its number of distinct co-purchase partners.
/// Equal degrees keep the graph's insertion order.
pub fn rank_items_by_degree(graph: &Graph, descending: bool) -> Vec<(&Item, usize)> {
    let degrees: Vec<(&Item, usize)> = graph
        .items()
        .map(|item| (item, graph.degree(item.as_str()).unwrap_or(0)))
        .collect();
    merge_sort(&degrees, |&(_, degree)| degree, descending)
}
