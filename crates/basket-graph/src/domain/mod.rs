//! Domain module for basket analysis
//!
//! Contains the co-purchase graph, value objects, errors, and invariants.

pub mod errors;
pub mod graph;
pub mod invariants;
pub mod value_objects;

pub use errors::*;
pub use graph::*;
pub use value_objects::*;
