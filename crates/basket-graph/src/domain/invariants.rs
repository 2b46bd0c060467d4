//! Domain invariants for basket graphs and traversals

use super::graph::Graph;
use super::value_objects::VisitedItem;
use std::collections::HashSet;

/// Symmetric Adjacency
/// If `b` is a neighbor of `a` with weight `w`, then `a` is a neighbor of `b`
/// with the same `w`.
pub fn invariant_symmetric_adjacency(graph: &Graph) -> bool {
    for item in graph.items() {
        for (neighbor, weight) in graph.neighbors(item.as_str()) {
            let mirrored = graph
                .neighbors(neighbor.as_str())
                .any(|(back, w)| back == item && w == weight);
            if !mirrored {
                return false;
            }
            if graph.edge_weight(neighbor.as_str(), item.as_str()) != Some(weight) {
                return false;
            }
        }
    }

    true
}

/// No Self-Loops
pub fn invariant_no_self_loops(graph: &Graph) -> bool {
    graph.items().all(|item| {
        graph.edge_weight(item.as_str(), item.as_str()).is_none()
            && graph.neighbors(item.as_str()).all(|(n, _)| n != item)
    })
}

/// One Edge Per Pair
/// Every edge is seen from exactly two endpoints and carries weight >= 1.
pub fn invariant_single_edge_per_pair(graph: &Graph) -> bool {
    let degree_sum: usize = graph
        .items()
        .filter_map(|item| graph.degree(item.as_str()))
        .sum();
    let edges = graph.edges();

    degree_sum == 2 * graph.edge_count()
        && edges.len() == graph.edge_count()
        && edges.iter().all(|e| e.weight >= 1)
}

/// Depth Bound
/// No traversal result lies deeper than the requested bound.
pub fn invariant_depth_bound(visited: &[VisitedItem], max_depth: usize) -> bool {
    visited.iter().all(|v| v.depth <= max_depth)
}

/// Unique Visits
/// Each item is reported at most once per traversal.
pub fn invariant_unique_visits(visited: &[VisitedItem]) -> bool {
    let mut seen = HashSet::with_capacity(visited.len());
    visited.iter().all(|v| seen.insert(v.item.as_str()))
}

/// Level Order
/// Breadth-first results never go back to a shallower level.
pub fn invariant_level_order(visited: &[VisitedItem]) -> bool {
    visited.windows(2).all(|w| w[0].depth <= w[1].depth)
}
