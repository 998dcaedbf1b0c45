use crate::graph::{VertexId, Weight};

/// Errors raised by graph construction and shortest-path queries.
///
/// All of these are input errors the caller can recover from. An unreachable
/// target is not an error: path queries report it as `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("vertex {vertex} is outside the valid range 1..={capacity}")]
    OutOfRange { vertex: VertexId, capacity: usize },

    #[error("start vertex {vertex} is outside the valid range 1..={capacity}")]
    InvalidVertex { vertex: VertexId, capacity: usize },

    #[error("edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight {
        from: VertexId,
        to: VertexId,
        weight: Weight,
    },

    #[error("edge {from} -> {to} has weight {weight}, above the maximum {max}")]
    WeightTooLarge {
        from: VertexId,
        to: VertexId,
        weight: Weight,
        max: Weight,
    },

    #[error("capacity {capacity} is invalid: must be between 1 and {max}")]
    InvalidCapacity { capacity: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;
