//! # Integration Flows
//!
//! End-to-end scenarios across the crate's layers.

pub mod flows;
