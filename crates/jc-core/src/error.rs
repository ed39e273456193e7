//! Error types for the canvas engine.
//!
//! Every failure is synchronous and deterministic: bad input is rejected
//! at the point of construction, mutation, or decode, and a failed bulk
//! operation leaves nothing behind. No retry semantics apply.

use crate::id::CanvasId;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CanvasError>;

/// Canvas engine error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    /// Malformed field on a node (bad color, bad subpath prefix,
    /// bad background style).
    #[error("invalid node: {0}")]
    InvalidNode(String),

    /// Malformed field on an edge (bad side or end token, bad color).
    #[error("invalid edge: {0}")]
    InvalidEdge(String),

    /// Id collision in the combined node+edge namespace.
    #[error("duplicate id: {0}")]
    DuplicateId(CanvasId),

    /// Edge endpoint that does not resolve to an existing node.
    #[error("edge {edge} references unknown node: {node}")]
    Reference { edge: CanvasId, node: CanvasId },

    /// Structural decode failure (malformed JSON, unknown node type,
    /// missing required field).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl CanvasError {
    /// Create an invalid-node error.
    #[must_use]
    pub fn invalid_node(msg: impl Into<String>) -> Self {
        Self::InvalidNode(msg.into())
    }

    /// Create an invalid-edge error.
    #[must_use]
    pub fn invalid_edge(msg: impl Into<String>) -> Self {
        Self::InvalidEdge(msg.into())
    }

    /// Create a validation error.
    #[must_use]
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
