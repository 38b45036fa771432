//! Error types for circuit graph construction and evaluation.

use crate::node::NodeId;
use breadboard_logic::{LogicError, RelativeDirection, SocketState};

/// Errors arising from graph misuse or from evaluating an infeasible graph.
///
/// Everything except [`GraphError::Cyclic`] is a contract violation: a
/// correctly wired builder never produces it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A node index past the end of the arena.
    #[error("node {id} does not exist (graph has {len} nodes)")]
    NodeOutOfRange { id: NodeId, len: usize },

    /// An input or output node was added for a socket in another state.
    #[error("socket state mismatch: expected {expected}, got {actual}")]
    SocketStateMismatch {
        expected: SocketState,
        actual: SocketState,
    },

    /// The operation needs wire nodes, which a reduced graph cannot hold.
    #[error("{operation} is not supported on a reduced graph")]
    UnsupportedOnReduced { operation: &'static str },

    /// Two-way wiring was requested for a node that is not a wire.
    #[error("node {0} is not a wire")]
    NotAWire(NodeId),

    /// The edge would bypass a nested circuit's boundary.
    #[error("illegal connection {from} -> {to}: {reason}")]
    IllegalConnection {
        from: NodeId,
        to: NodeId,
        reason: &'static str,
    },

    /// A circuit node was expected.
    #[error("node {0} is not a circuit")]
    NotACircuit(NodeId),

    /// The circuit exposes no output on the requested side.
    #[error("circuit {circuit} has no output on its {side} side")]
    MissingCircuitOutput {
        circuit: NodeId,
        side: RelativeDirection,
    },

    /// A board input or output node was expected.
    #[error("node {0} is not an input or output node")]
    NotAnIoNode(NodeId),

    /// Circuit nodes are only observed through their output children.
    #[error("circuit node {0} cannot be evaluated directly")]
    EvaluateCircuit(NodeId),

    /// A wire node was found where only functional nodes may exist.
    #[error("wire node {0} found in a reduced graph")]
    WireInReduced(NodeId),

    /// The graph contains a feedback loop and has no truth table.
    #[error("circuit graph is cyclic")]
    Cyclic,

    /// The synthesized table violates a table invariant.
    #[error("invalid truth table: {0}")]
    Table(#[from] LogicError),
}
