//! Co-purchase graph
//!
//! Undirected, weighted graph over items. Vertices live in a `Vec` in
//! insertion order and are addressed by [`VertexId`]. Edge weights live in a
//! single store keyed by the canonical `(min_id, max_id)` pair, so both
//! endpoints always observe the same weight. Each vertex only records the ids
//! of its neighbors, in the order they were first paired with it.

use super::errors::AnalysisError;
use super::value_objects::{GraphStats, Item, Weight};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Dense index of a vertex inside a [`Graph`]
pub type VertexId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct EdgeKey(VertexId, VertexId);

impl EdgeKey {
    fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}

#[derive(Clone, Debug)]
struct Vertex {
    item: Item,
    neighbors: Vec<VertexId>,
}

/// One undirected edge as reported by [`Graph::edges`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<'a> {
    pub a: &'a Item,
    pub b: &'a Item,
    pub weight: Weight,
}

#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: HashMap<Item, VertexId>,
    weights: HashMap<EdgeKey, Weight>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item as a vertex. No-op if it already exists.
    pub fn add_item(&mut self, item: impl Into<Item>) -> VertexId {
        let item = item.into();
        if let Some(&id) = self.index.get(&item) {
            return id;
        }
        let id = self.vertices.len();
        self.index.insert(item.clone(), id);
        self.vertices.push(Vertex {
            item,
            neighbors: Vec::new(),
        });
        id
    }

    /// Record one co-purchase of `a` and `b`.
    ///
    /// Creates the edge with weight 1 or bumps the existing weight by 1 and
    /// returns the new weight. Missing vertices are created. Empty
    /// identifiers and self-loops are rejected without touching the graph.
    pub fn add_edge(
        &mut self,
        a: impl Into<Item>,
        b: impl Into<Item>,
    ) -> Result<Weight, AnalysisError> {
        let (a, b) = (a.into(), b.into());
        if a.as_str().is_empty() || b.as_str().is_empty() {
            return Err(AnalysisError::InvalidInput(format!(
                "empty item identifier rejected: ('{}', '{}')",
                a, b
            )));
        }
        if a == b {
            return Err(AnalysisError::InvalidInput(format!(
                "self-loop rejected: '{}' cannot pair with itself",
                a
            )));
        }

        let a_id = self.add_item(a);
        let b_id = self.add_item(b);
        Ok(self.bump_edge(a_id, b_id))
    }

    /// Both ids must be valid and distinct
    pub(crate) fn bump_edge(&mut self, a: VertexId, b: VertexId) -> Weight {
        debug_assert_ne!(a, b);
        let weight = self.weights.entry(EdgeKey::new(a, b)).or_insert(0);
        *weight += 1;
        let weight = *weight;

        if weight == 1 {
            self.vertices[a].neighbors.push(b);
            self.vertices[b].neighbors.push(a);
        }
        weight
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.index.contains_key(item)
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edge_weight(a, b).is_some()
    }

    /// Shared co-purchase count of `a` and `b`, if they were ever bought together
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<Weight> {
        let a = self.vertex_id(a)?;
        let b = self.vertex_id(b)?;
        self.weight_between(a, b)
    }

    /// Neighbors of `item` with their edge weights, in first-discovery order.
    /// Empty for unknown or isolated items.
    pub fn neighbors<'a>(&'a self, item: &str) -> impl Iterator<Item = (&'a Item, Weight)> + 'a {
        self.vertex_id(item).into_iter().flat_map(move |id| {
            self.adjacent(id)
                .map(move |n| (self.item_at(n), self.weight_between(id, n).unwrap_or(0)))
        })
    }

    pub fn degree(&self, item: &str) -> Option<usize> {
        self.vertex_id(item).map(|id| self.vertices[id].neighbors.len())
    }

    /// All items in the order they were first registered
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.vertices.iter().map(|v| &v.item)
    }

    /// Every edge exactly once, ordered by the first endpoint's insertion
    /// order and then by that endpoint's neighbor discovery order.
    pub fn edges(&self) -> Vec<Edge<'_>> {
        let mut edges = Vec::with_capacity(self.weights.len());
        for (id, vertex) in self.vertices.iter().enumerate() {
            for &n in &vertex.neighbors {
                if n < id {
                    continue;
                }
                if let Some(weight) = self.weight_between(id, n) {
                    edges.push(Edge {
                        a: &vertex.item,
                        b: &self.vertices[n].item,
                        weight,
                    });
                }
            }
        }
        edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
            isolated_count: self
                .vertices
                .iter()
                .filter(|v| v.neighbors.is_empty())
                .count(),
            total_weight: self.weights.values().sum(),
        }
    }

    pub(crate) fn vertex_id(&self, item: &str) -> Option<VertexId> {
        self.index.get(item).copied()
    }

    pub(crate) fn item_at(&self, id: VertexId) -> &Item {
        &self.vertices[id].item
    }

    pub(crate) fn adjacent(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices[id].neighbors.iter().copied()
    }

    pub(crate) fn neighbor_at(&self, id: VertexId, position: usize) -> Option<VertexId> {
        self.vertices[id].neighbors.get(position).copied()
    }

    pub(crate) fn weight_between(&self, a: VertexId, b: VertexId) -> Option<Weight> {
        self.weights.get(&EdgeKey::new(a, b)).copied()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Graph(empty)");
        }

        write!(
            f,
            "Graph with {} items and {} edges:",
            self.vertex_count(),
            self.edge_count()
        )?;

        let sorted: BTreeMap<&Item, &Vertex> =
            self.vertices.iter().map(|v| (&v.item, v)).collect();

        for (item, vertex) in sorted {
            write!(f, "\n  {}: ", item)?;
            if vertex.neighbors.is_empty() {
                write!(f, "(isolated)")?;
                continue;
            }
            let id = self.index[item];
            let neighbors: BTreeMap<&Item, Weight> = vertex
                .neighbors
                .iter()
                .map(|&n| (self.item_at(n), self.weight_between(id, n).unwrap_or(0)))
                .collect();
            for (i, (neighbor, weight)) in neighbors.into_iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}({})", neighbor, weight)?;
            }
        }
        Ok(())
    }
}
