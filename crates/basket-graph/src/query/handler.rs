//! Query Handler
//!
//! Decodes requests, delegates to the analysis API and wraps every outcome,
//! including failures, into a [`QueryResponse`].

use crate::application::service::BasketAnalysisService;
use crate::domain::errors::AnalysisError;
use crate::ports::inbound::BasketAnalysisApi;
use crate::query::payloads::{QueryRequest, QueryResponse, QueryResult};
use std::time::Instant;
use tracing::{error, info, warn};

/// Handler for analysis queries.
pub struct QueryHandler<A = BasketAnalysisService> {
    api: A,
}

impl<A: BasketAnalysisApi> QueryHandler<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Handle a decoded request.
    pub fn handle(&self, request: QueryRequest) -> QueryResponse {
        let start_time = Instant::now();

        match self.dispatch(&request) {
            Ok(result) => {
                let elapsed = elapsed_micros(start_time);
                info!(
                    query = ?request,
                    result_count = result.len(),
                    elapsed_micros = elapsed,
                    "Query answered"
                );
                QueryResponse::ok(result, elapsed)
            }
            Err(e) => {
                match &e {
                    AnalysisError::InvalidInput(_) | AnalysisError::NotFound(_) => {
                        warn!(query = ?request, error = %e, "Query rejected")
                    }
                    _ => error!(query = ?request, error = %e, "Query failed"),
                }
                QueryResponse::failed(e.to_string(), elapsed_micros(start_time))
            }
        }
    }

    /// Handle a JSON-encoded request. Malformed JSON yields a failed response.
    pub fn handle_json(&self, payload: &str) -> QueryResponse {
        match serde_json::from_str::<QueryRequest>(payload) {
            Ok(request) => self.handle(request),
            Err(e) => {
                warn!(error = %e, "Malformed query payload");
                QueryResponse::failed(format!("Malformed query: {}", e), 0)
            }
        }
    }

    fn dispatch(&self, request: &QueryRequest) -> Result<QueryResult, AnalysisError> {
        let result = match request {
            QueryRequest::NeighborsWithin {
                item,
                depth,
                strategy,
            } => QueryResult::Traversal(self.api.neighbors_within(item, *depth, *strategy)?),
            QueryRequest::TopBundles { size, k } => {
                QueryResult::Bundles(self.api.top_bundles(*size, *k)?)
            }
            QueryRequest::ItemsBoughtWith {
                item,
                min_frequency,
                limit,
            } => QueryResult::Associations(self.api.items_bought_with(item, *min_frequency, *limit)?),
            QueryRequest::TopAssociations { item, n, depth } => {
                QueryResult::Associations(self.api.top_associations(item, *n, *depth)?)
            }
            QueryRequest::FrequentPairs { min_frequency } => {
                QueryResult::Bundles(self.api.frequent_pairs(*min_frequency))
            }
            QueryRequest::GraphStats => QueryResult::Stats(self.api.stats()),
        };
        Ok(result)
    }
}

fn elapsed_micros(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
}
