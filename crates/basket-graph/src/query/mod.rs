//! Query Module
//!
//! JSON-friendly request/response layer over [`BasketAnalysisApi`].
//!
//! [`BasketAnalysisApi`]: crate::ports::inbound::BasketAnalysisApi

pub mod handler;
pub mod payloads;

pub use handler::QueryHandler;
pub use payloads::*;
