//! Inbound Ports (Driving Ports / API)

use crate::algorithms::search::Traversal;
use crate::domain::errors::AnalysisError;
use crate::domain::value_objects::{Association, BundleFrequency, GraphStats, TraversalStrategy, Weight};

/// Read-only queries over a built co-purchase graph.
///
/// Implementations hold an immutable graph, so every method takes `&self`
/// and concurrent callers never observe partial state.
pub trait BasketAnalysisApi: Send + Sync {
    /// Items reachable from `item` within `depth` hops.
    ///
    /// The result is cut short (and flagged `truncated`) when the configured
    /// visit cap is reached.
    fn neighbors_within(
        &self,
        item: &str,
        depth: usize,
        strategy: TraversalStrategy,
    ) -> Result<Traversal, AnalysisError>;

    /// Most frequent bundles of `bundle_size` items
    fn top_bundles(&self, bundle_size: usize, k: usize) -> Result<Vec<BundleFrequency>, AnalysisError>;

    /// Direct co-purchase partners of `item`, heaviest first
    fn items_bought_with(
        &self,
        item: &str,
        min_frequency: Weight,
        limit: Option<usize>,
    ) -> Result<Vec<Association>, AnalysisError>;

    /// Strongest direct associations among items within `depth` hops
    fn top_associations(
        &self,
        item: &str,
        n: usize,
        depth: usize,
    ) -> Result<Vec<Association>, AnalysisError>;

    fn frequent_pairs(&self, min_frequency: Weight) -> Vec<BundleFrequency>;

    fn stats(&self) -> GraphStats;
}
