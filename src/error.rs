//! Error types for wmatching

use thiserror::Error;

use crate::{Node, NumNodes, Weight};

/// Result type alias using wmatching's Error
pub type Result<T> = std::result::Result<T, MatchingError>;

/// Errors that can occur when building or solving a matching instance
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchingError {
    /// A solver needs at least one node
    #[error("A matching instance needs at least one node")]
    EmptyGraph,

    /// Node id outside of `1..=n`
    #[error("Node {node} is out of range for a graph with nodes 1..={n}")]
    NodeOutOfRange {
        /// The invalid node
        node: Node,
        /// Number of nodes
        n: NumNodes,
    },

    /// Negative edge weight
    #[error("Edge ({u},{v}) has negative weight {weight}")]
    NegativeWeight { u: Node, v: Node, weight: Weight },

    /// Edge weight exceeding the supported maximum
    #[error("Edge ({u},{v}) has weight {weight} exceeding the maximum of {max}")]
    WeightTooLarge {
        u: Node,
        v: Node,
        weight: Weight,
        max: Weight,
    },

    /// Self-loops cannot be part of a matching
    #[error("Self-loop at node {node} is not supported")]
    SelfLoop { node: Node },

    /// Parallel edge while duplicates are configured to be rejected
    #[error("Edge ({u},{v}) was added more than once")]
    DuplicateEdge { u: Node, v: Node },

    /// A matching failed verification against its instance
    #[error("Invalid matching: {0}")]
    InvalidMatching(String),

    /// The solver reached a state that should be unreachable
    #[error("Internal solver error: {0}")]
    Internal(#[from] InternalError),
}

/// Invariant violations inside the blossom solver.
///
/// These indicate a bug (or unsupported input that slipped through validation);
/// the solver instance must not be used afterwards.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalError {
    #[error("edge endpoints {x} and {y} already share blossom {blossom}")]
    SameBlossom { x: usize, y: usize, blossom: usize },

    #[error("no free blossom id left")]
    BlossomIdsExhausted,

    #[error("no finite event left while searching from root {root}")]
    NoFiniteEvent { root: usize },

    #[error("event clock would move backwards from {current} to {next}")]
    ClockWentBackwards { current: Weight, next: Weight },
}
