//! Trunkline Core Library
//!
//! Routing query engine for small, fixed, weighted directed networks:
//! exact-route distances, bounded walk counts, and shortest-path queries.

pub mod error;
pub mod graph;
pub mod logging;
