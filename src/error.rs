//! Error types for trunkline
//!
//! Every query outcome that is not a real distance or count is an explicit
//! variant here; the engine never encodes absence as a sentinel value.

use crate::graph::types::{Node, Weight};
use thiserror::Error;

/// Errors that can occur during routing queries
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrunklineError {
    // Query outcomes
    #[error("no such route: no edge {from} -> {to}")]
    NoSuchRoute { from: Node, to: Node },

    #[error("no route from {from} to {to}")]
    Unreachable { from: Node, to: Node },

    // Caller contract violations
    #[error("edge weight must be a positive integer: {from} -> {to} given {weight}")]
    InvalidWeight {
        from: Node,
        to: Node,
        weight: Weight,
    },

    #[error("route must contain at least one node")]
    EmptyRoute,
}

impl TrunklineError {
    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            TrunklineError::NoSuchRoute { .. } => "no_such_route",
            TrunklineError::Unreachable { .. } => "unreachable",
            TrunklineError::InvalidWeight { .. } => "invalid_weight",
            TrunklineError::EmptyRoute => "empty_route",
        }
    }
}

/// Result type alias for trunkline operations
pub type Result<T> = std::result::Result<T, TrunklineError>;
