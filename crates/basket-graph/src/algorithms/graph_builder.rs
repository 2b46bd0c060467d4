//! Co-purchase Graph Builder
//!
//! Turns transactions into a [`Graph`]: every unordered pair of distinct
//! items inside one transaction adds 1 to that pair's edge weight.
//! Cost is O(k^2) per transaction of k distinct items.

use crate::config::AnalysisConfig;
use crate::domain::graph::{Graph, VertexId};
use crate::domain::invariants::{invariant_no_self_loops, invariant_symmetric_adjacency};
use crate::domain::value_objects::Transaction;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::{debug, info, warn};

/// Counters describing one build
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSummary {
    pub transactions_seen: usize,
    pub transactions_skipped: usize,
    pub vertex_count: usize,
    pub edge_count: usize,
}

/// Build a graph from transactions with default settings.
///
/// Duplicate items within a transaction count once. Transactions with a
/// single distinct item only register that item. An empty input yields an
/// empty graph.
pub fn build_graph(transactions: &[Transaction]) -> Graph {
    GraphBuilder::new().build(transactions).0
}

/// Configurable graph builder.
///
/// A transaction containing an empty identifier (after normalization, when
/// enabled) is skipped as a whole: none of its items or pairs reach the graph.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    normalize_items: bool,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            normalize_items: config.normalize_items,
        }
    }

    /// Trim and lowercase identifiers before pairing
    pub fn with_normalization(mut self, normalize_items: bool) -> Self {
        self.normalize_items = normalize_items;
        self
    }

    pub fn build(&self, transactions: &[Transaction]) -> (Graph, BuildSummary) {
        self.assemble(transactions.iter().map(Cow::Borrowed), |_| {})
    }

    /// Build a graph and keep the accepted transactions alongside it, so
    /// that later mining over transactions sees exactly what the graph saw.
    pub fn build_dataset(
        &self,
        transactions: Vec<Transaction>,
    ) -> (Graph, Vec<Transaction>, BuildSummary) {
        let mut accepted = Vec::with_capacity(transactions.len());
        let (graph, summary) = self.assemble(transactions.into_iter().map(Cow::Owned), |tx| {
            accepted.push(tx.into_owned())
        });
        (graph, accepted, summary)
    }

    /// Normalize (when enabled) and drop malformed transactions.
    /// Returns the accepted transactions and the number skipped.
    pub fn prepare(&self, transactions: Vec<Transaction>) -> (Vec<Transaction>, usize) {
        let total = transactions.len();
        let accepted: Vec<Transaction> = transactions
            .into_iter()
            .enumerate()
            .filter_map(|(index, tx)| self.accept(index, Cow::Owned(tx)))
            .map(Cow::into_owned)
            .collect();

        let skipped = total - accepted.len();
        (accepted, skipped)
    }

    fn assemble<'a>(
        &self,
        transactions: impl Iterator<Item = Cow<'a, Transaction>>,
        mut keep: impl FnMut(Cow<'a, Transaction>),
    ) -> (Graph, BuildSummary) {
        let mut graph = Graph::new();
        let mut seen = 0;
        let mut skipped = 0;

        for (index, tx) in transactions.enumerate() {
            seen += 1;
            match self.accept(index, tx) {
                Some(tx) => {
                    add_transaction(&mut graph, &tx);
                    keep(tx);
                }
                None => skipped += 1,
            }
        }

        let summary = summarize(&graph, seen, skipped);
        info!(
            transactions = summary.transactions_seen,
            skipped = summary.transactions_skipped,
            items = summary.vertex_count,
            edges = summary.edge_count,
            "Co-purchase graph built"
        );
        (graph, summary)
    }

    /// The single acceptance rule shared by every build path
    fn accept<'a>(&self, index: usize, tx: Cow<'a, Transaction>) -> Option<Cow<'a, Transaction>> {
        let tx = if self.normalize_items {
            Cow::Owned(tx.normalized())
        } else {
            tx
        };
        if tx.is_malformed() {
            warn!(index, "Skipping malformed transaction with an empty item");
            return None;
        }
        Some(tx)
    }
}

fn add_transaction(graph: &mut Graph, tx: &Transaction) {
    let ids: Vec<VertexId> = tx
        .distinct_items()
        .into_iter()
        .map(|item| graph.add_item(item.clone()))
        .collect();

    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            graph.bump_edge(ids[i], ids[j]);
        }
    }

    debug!(distinct_items = ids.len(), "Transaction paired");
}

fn summarize(graph: &Graph, seen: usize, skipped: usize) -> BuildSummary {
    debug_assert!(invariant_symmetric_adjacency(graph));
    debug_assert!(invariant_no_self_loops(graph));

    BuildSummary {
        transactions_seen: seen,
        transactions_skipped: skipped,
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
    }
}
