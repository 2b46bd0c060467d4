//! Error types for basket analysis

use thiserror::Error;

/// All errors that can occur while building or querying a basket graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Request violates an operation's preconditions
    /// (self-loop, empty identifier, bundle size below 2, k below 1,
    /// non-comparable keys)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Item is not a vertex of the graph
    #[error("Item not found: {0}")]
    NotFound(String),

    /// Transaction source failed to produce a dataset
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AnalysisError {
    pub(crate) fn not_found(item: &str) -> Self {
        Self::NotFound(format!("'{}' is not in the graph", item))
    }
}

/// Error raised by a transaction source (the loader side of the boundary)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("Failed to load transactions: {0}")]
    LoadFailed(String),
}
