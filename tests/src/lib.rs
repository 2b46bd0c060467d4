//! # Basket Graph Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Shared datasets (fixed grocery baskets, seeded synthetic data)
//! └── integration/      # End-to-end flows: source -> service -> query handler
//!
//! tests/benches/
//! └── analysis_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p basket-tests
//!
//! # Benchmarks
//! cargo bench -p basket-tests
//! ```

pub mod fixtures;
pub mod integration;
