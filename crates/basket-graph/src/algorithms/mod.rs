//! Algorithms module for basket analysis
//!
//! Contains:
//! - Co-purchase graph builder
//! - Depth-limited BFS/DFS
//! - Stable merge sort and rankings
//! - Frequent itemset mining

pub mod graph_builder;
pub mod itemsets;
pub mod ranking;
pub mod search;

pub use graph_builder::{build_graph, BuildSummary, GraphBuilder};
pub use itemsets::{frequent_pairs, items_bought_with, top_associations, top_bundles, top_pair_bundles};
pub use ranking::{
    merge_sort, merge_sort_by, rank_items_by_degree, sort_associations_by_weight,
    sort_bundles_by_frequency, try_merge_sort_by, try_merge_sort_by_key,
};
pub use search::{bfs, dfs, traverse, Traversal, TraversalLimits};
