//! Query Payloads
//!
//! Serializable request/response envelopes for driving the analysis from
//! outside the process (JSON over any transport).

use crate::algorithms::search::Traversal;
use crate::domain::value_objects::{Association, BundleFrequency, GraphStats, TraversalStrategy, Weight};
use serde::{Deserialize, Serialize};

// ============================================================
// INCOMING REQUESTS
// ============================================================

/// A single query against the loaded dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum QueryRequest {
    /// Items within `depth` hops of `item`
    NeighborsWithin {
        item: String,
        depth: usize,
        #[serde(default)]
        strategy: TraversalStrategy,
    },
    /// Most frequent bundles of `size` items
    TopBundles { size: usize, k: usize },
    /// Direct co-purchase partners of `item`
    ItemsBoughtWith {
        item: String,
        #[serde(default = "default_min_frequency")]
        min_frequency: Weight,
        #[serde(default)]
        limit: Option<usize>,
    },
    /// Strongest direct associations within `depth` hops
    TopAssociations {
        item: String,
        n: usize,
        #[serde(default = "default_depth")]
        depth: usize,
    },
    FrequentPairs {
        #[serde(default = "default_min_frequency")]
        min_frequency: Weight,
    },
    GraphStats,
}

fn default_min_frequency() -> Weight {
    1
}

fn default_depth() -> usize {
    1
}

// ============================================================
// OUTGOING RESPONSES
// ============================================================

/// Response to a [`QueryRequest`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Whether the query succeeded
    pub success: bool,
    /// Query output (if succeeded)
    pub result: Option<QueryResult>,
    pub metrics: QueryMetrics,
    /// Error message (if failed)
    pub error: Option<String>,
}

impl QueryResponse {
    pub(crate) fn ok(result: QueryResult, elapsed_micros: u64) -> Self {
        Self {
            success: true,
            metrics: QueryMetrics {
                result_count: result.len(),
                elapsed_micros,
            },
            result: Some(result),
            error: None,
        }
    }

    pub(crate) fn failed(error: impl Into<String>, elapsed_micros: u64) -> Self {
        Self {
            success: false,
            result: None,
            metrics: QueryMetrics {
                result_count: 0,
                elapsed_micros,
            },
            error: Some(error.into()),
        }
    }
}

/// Query output, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum QueryResult {
    Traversal(Traversal),
    Bundles(Vec<BundleFrequency>),
    Associations(Vec<Association>),
    Stats(GraphStats),
}

impl QueryResult {
    /// Number of records carried by the result
    pub fn len(&self) -> usize {
        match self {
            QueryResult::Traversal(t) => t.visited.len(),
            QueryResult::Bundles(b) => b.len(),
            QueryResult::Associations(a) => a.len(),
            QueryResult::Stats(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Query metrics for observability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryMetrics {
    /// Records in the result
    pub result_count: usize,
    /// Time taken to answer the query (microseconds)
    pub elapsed_micros: u64,
}
