//! Depth-Limited Graph Search
//!
//! Breadth-first and depth-first traversal from a start item, bounded by a
//! hop count and optionally by a soft cap on the number of visited items.
//! Neighbors are explored in [`Graph::neighbors`] order, so results are
//! deterministic for a given graph. Neither traversal mutates the graph.

use crate::domain::errors::AnalysisError;
use crate::domain::graph::{Graph, VertexId};
use crate::domain::value_objects::{TraversalStrategy, VisitedItem};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Bounds applied to a traversal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraversalLimits {
    /// Maximum hops from the start item; 0 returns only the start
    pub max_depth: usize,
    /// Stop after recording this many items
    pub max_visits: Option<usize>,
}

impl TraversalLimits {
    pub fn depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            max_visits: None,
        }
    }

    pub fn with_max_visits(mut self, max_visits: usize) -> Self {
        self.max_visits = Some(max_visits);
        self
    }

    fn reached(&self, visited: usize) -> bool {
        self.max_visits.is_some_and(|cap| visited >= cap)
    }
}

/// Outcome of a traversal
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traversal {
    /// Items in the order they were recorded
    pub visited: Vec<VisitedItem>,
    /// The visit cap stopped the traversal before it was exhausted
    pub truncated: bool,
}

/// Breadth-first search up to `max_depth` hops.
///
/// Each reachable item appears once, at its minimum depth from `start`.
pub fn bfs(graph: &Graph, start: &str, max_depth: usize) -> Result<Vec<VisitedItem>, AnalysisError> {
    traverse(
        graph,
        start,
        TraversalStrategy::BreadthFirst,
        TraversalLimits::depth(max_depth),
    )
    .map(|t| t.visited)
}

/// Depth-first search up to `max_depth` hops, in pre-order.
///
/// Each item appears once, at the depth where the DFS path first reached it,
/// which is not necessarily its shortest distance from `start`.
pub fn dfs(graph: &Graph, start: &str, max_depth: usize) -> Result<Vec<VisitedItem>, AnalysisError> {
    traverse(
        graph,
        start,
        TraversalStrategy::DepthFirst,
        TraversalLimits::depth(max_depth),
    )
    .map(|t| t.visited)
}

pub fn traverse(
    graph: &Graph,
    start: &str,
    strategy: TraversalStrategy,
    limits: TraversalLimits,
) -> Result<Traversal, AnalysisError> {
    let start_id = graph
        .vertex_id(start)
        .ok_or_else(|| AnalysisError::not_found(start))?;

    let (order, truncated) = match strategy {
        TraversalStrategy::BreadthFirst => breadth_first(graph, start_id, limits),
        TraversalStrategy::DepthFirst => depth_first(graph, start_id, limits),
    };

    if truncated {
        warn!(
            start,
            ?strategy,
            max_visits = ?limits.max_visits,
            "Traversal stopped at visit cap"
        );
    }
    debug!(start, ?strategy, visited = order.len(), "Traversal complete");

    let visited = order
        .into_iter()
        .map(|(id, depth)| VisitedItem {
            item: graph.item_at(id).clone(),
            depth,
        })
        .collect();

    Ok(Traversal { visited, truncated })
}

fn breadth_first(
    graph: &Graph,
    start: VertexId,
    limits: TraversalLimits,
) -> (Vec<(VertexId, usize)>, bool) {
    let mut discovered = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::from([(start, 0usize)]);
    let mut order = Vec::new();
    discovered[start] = true;

    while let Some((id, depth)) = queue.pop_front() {
        if limits.reached(order.len()) {
            return (order, true);
        }
        order.push((id, depth));

        if depth >= limits.max_depth {
            continue;
        }
        for neighbor in graph.adjacent(id) {
            if !discovered[neighbor] {
                discovered[neighbor] = true;
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    (order, false)
}

/// Iterative pre-order DFS; each stack frame remembers how many of its
/// neighbors have been tried so the order matches the recursive form.
fn depth_first(
    graph: &Graph,
    start: VertexId,
    limits: TraversalLimits,
) -> (Vec<(VertexId, usize)>, bool) {
    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();

    if limits.reached(0) {
        return (order, true);
    }
    visited[start] = true;
    order.push((start, 0));
    let mut stack: Vec<(VertexId, usize, usize)> = vec![(start, 0, 0)];

    while let Some(frame) = stack.last_mut() {
        let (id, depth, next) = *frame;
        if depth >= limits.max_depth {
            stack.pop();
            continue;
        }

        let Some(neighbor) = graph.neighbor_at(id, next) else {
            stack.pop();
            continue;
        };
        frame.2 += 1;

        if visited[neighbor] {
            continue;
        }
        if limits.reached(order.len()) {
            return (order, true);
        }
        visited[neighbor] = true;
        order.push((neighbor, depth + 1));
        stack.push((neighbor, depth + 1, 0));
    }

    (order, false)
}
