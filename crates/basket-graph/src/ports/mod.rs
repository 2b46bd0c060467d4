//! Ports module for basket analysis
//!
//! Defines inbound (query API) and outbound (transaction source) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::BasketAnalysisApi;
pub use outbound::{InMemoryTransactionSource, TransactionSource};
