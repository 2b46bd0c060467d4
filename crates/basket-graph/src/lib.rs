//! # Basket Graph
//!
//! Market-basket analysis over a weighted co-purchase graph.
//!
//! Every transaction contributes one unit of weight to the edge between each
//! pair of distinct items it contains. The resulting graph answers
//! "what is bought with X" through depth-limited BFS/DFS, and frequent
//! bundles of any size are mined from the transactions themselves. All
//! rankings go through a stable merge sort, so ties resolve deterministically.
//!
//! ## Architecture
//!
//! - **Domain**: Items, transactions, bundles and the co-purchase `Graph`
//! - **Algorithms**: Graph builder, depth-limited search, merge sort, itemset mining
//! - **Ports**: Inbound (`BasketAnalysisApi`) and Outbound (`TransactionSource`)
//! - **Application**: Service orchestration
//! - **Query**: JSON request/response handler
//! - **Telemetry**: `tracing-subscriber` setup for binaries and tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use basket_graph::{AnalysisConfig, BasketAnalysisApi, BasketAnalysisService, Transaction};
//!
//! let transactions = vec![
//!     Transaction::from(["milk", "bread"]),
//!     Transaction::from(["milk", "eggs"]),
//! ];
//! let service = BasketAnalysisService::from_transactions(transactions, AnalysisConfig::default())?;
//! let partners = service.items_bought_with("milk", 1, Some(5))?;
//! ```

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod query;
pub mod telemetry;

pub use algorithms::{build_graph, BuildSummary, GraphBuilder, Traversal, TraversalLimits};
pub use application::service::BasketAnalysisService;
pub use config::AnalysisConfig;
pub use domain::errors::{AnalysisError, SourceError};
pub use domain::graph::{Edge, Graph, VertexId};
pub use domain::value_objects::*;
pub use query::{QueryHandler, QueryMetrics, QueryRequest, QueryResponse, QueryResult};
pub use ports::inbound::BasketAnalysisApi;
pub use ports::outbound::{InMemoryTransactionSource, TransactionSource};
pub use telemetry::{init_tracing, TelemetryConfig, TelemetryError};
