//! Configuration for basket analysis

use crate::domain::errors::AnalysisError;
use serde::{Deserialize, Serialize};
use std::env;

/// Analysis configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Trim and lowercase item identifiers before building the graph
    pub normalize_items: bool,
    /// Soft cap on items recorded by a single traversal
    pub max_traversal_visits: usize,
    /// Largest bundle size accepted by `top_bundles` (subset enumeration is exponential)
    pub max_bundle_size: usize,
    /// Keep only the first N transactions of a loaded dataset
    pub max_transactions: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            normalize_items: false,
            max_traversal_visits: 10_000,
            max_bundle_size: 5,
            max_transactions: None,
        }
    }
}

impl AnalysisConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `BASKET_NORMALIZE_ITEMS`: Normalize identifiers (default: false)
    /// - `BASKET_MAX_TRAVERSAL_VISITS`: Traversal visit cap (default: 10000)
    /// - `BASKET_MAX_BUNDLE_SIZE`: Largest bundle size (default: 5)
    /// - `BASKET_MAX_TRANSACTIONS`: Dataset truncation (default: unlimited)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            normalize_items: lookup("BASKET_NORMALIZE_ITEMS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.normalize_items),

            max_traversal_visits: lookup("BASKET_MAX_TRAVERSAL_VISITS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_traversal_visits),

            max_bundle_size: lookup("BASKET_MAX_BUNDLE_SIZE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_bundle_size),

            max_transactions: lookup("BASKET_MAX_TRANSACTIONS")
                .and_then(|v| v.parse().ok())
                .or(defaults.max_transactions),
        }
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.max_traversal_visits == 0 {
            return Err(AnalysisError::InvalidConfig(
                "max_traversal_visits must be at least 1".to_string(),
            ));
        }
        if self.max_bundle_size < 2 {
            return Err(AnalysisError::InvalidConfig(format!(
                "max_bundle_size must be at least 2, got {}",
                self.max_bundle_size
            )));
        }
        Ok(())
    }
}
