//! Basket Analysis Service
//!
//! Main service implementing BasketAnalysisApi.

use crate::algorithms::graph_builder::{BuildSummary, GraphBuilder};
use crate::algorithms::itemsets;
use crate::algorithms::search::{traverse, Traversal, TraversalLimits};
use crate::config::AnalysisConfig;
use crate::domain::errors::AnalysisError;
use crate::domain::graph::Graph;
use crate::domain::value_objects::{
    Association, BundleFrequency, GraphStats, Transaction, TraversalStrategy, Weight,
};
use crate::ports::inbound::BasketAnalysisApi;
use crate::ports::outbound::TransactionSource;

use tracing::{debug, info, warn};

/// Basket Analysis Service
///
/// Owns one immutable dataset:
/// 1. Validate config
/// 2. Truncate to `max_transactions`
/// 3. Normalize and drop malformed transactions
/// 4. Build the co-purchase graph
///
/// Queries then run against the graph (or the accepted transactions, for
/// bundles larger than pairs).
#[derive(Debug)]
pub struct BasketAnalysisService {
    config: AnalysisConfig,
    graph: Graph,
    transactions: Vec<Transaction>,
    summary: BuildSummary,
}

impl BasketAnalysisService {
    pub fn from_transactions(
        mut transactions: Vec<Transaction>,
        config: AnalysisConfig,
    ) -> Result<Self, AnalysisError> {
        config.validate()?;

        if let Some(max) = config.max_transactions {
            if transactions.len() > max {
                info!(
                    available = transactions.len(),
                    max_transactions = max,
                    "Truncating dataset"
                );
                transactions.truncate(max);
            }
        }

        let (graph, transactions, summary) =
            GraphBuilder::from_config(&config).build_dataset(transactions);

        Ok(Self {
            config,
            graph,
            transactions,
            summary,
        })
    }

    /// Pull the dataset from a source and build the service
    pub fn load(
        source: &dyn TransactionSource,
        config: AnalysisConfig,
    ) -> Result<Self, AnalysisError> {
        let transactions = source.load()?;
        debug!(loaded = transactions.len(), "Transactions loaded from source");
        Self::from_transactions(transactions, config)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Transactions that reached the graph (after truncation, normalization
    /// and skipping)
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn summary(&self) -> BuildSummary {
        self.summary
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    fn check_bundle_size(&self, bundle_size: usize) -> Result<(), AnalysisError> {
        if bundle_size > self.config.max_bundle_size {
            return Err(AnalysisError::InvalidInput(format!(
                "bundle_size {} exceeds the configured maximum of {}",
                bundle_size, self.config.max_bundle_size
            )));
        }
        Ok(())
    }
}

impl BasketAnalysisApi for BasketAnalysisService {
    fn neighbors_within(
        &self,
        item: &str,
        depth: usize,
        strategy: TraversalStrategy,
    ) -> Result<Traversal, AnalysisError> {
        let limits = TraversalLimits::depth(depth).with_max_visits(self.config.max_traversal_visits);
        traverse(&self.graph, item, strategy, limits)
    }

    fn top_bundles(&self, bundle_size: usize, k: usize) -> Result<Vec<BundleFrequency>, AnalysisError> {
        self.check_bundle_size(bundle_size)?;

        let bundles = if bundle_size == 2 {
            itemsets::top_pair_bundles(&self.graph, k)?
        } else {
            itemsets::top_bundles(&self.transactions, bundle_size, k)?
        };

        debug!(bundle_size, k, returned = bundles.len(), "Top bundles computed");
        Ok(bundles)
    }

    fn items_bought_with(
        &self,
        item: &str,
        min_frequency: Weight,
        limit: Option<usize>,
    ) -> Result<Vec<Association>, AnalysisError> {
        itemsets::items_bought_with(&self.graph, item, min_frequency, limit)
    }

    fn top_associations(
        &self,
        item: &str,
        n: usize,
        depth: usize,
    ) -> Result<Vec<Association>, AnalysisError> {
        itemsets::top_associations(&self.graph, item, n, depth)
    }

    fn frequent_pairs(&self, min_frequency: Weight) -> Vec<BundleFrequency> {
        let pairs = itemsets::frequent_pairs(&self.graph, min_frequency);
        if pairs.is_empty() {
            warn!(min_frequency, "No pairs reach the frequency threshold");
        }
        pairs
    }

    fn stats(&self) -> GraphStats {
        self.graph.stats()
    }
}
