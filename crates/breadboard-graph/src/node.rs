//! Graph node variants.
//!
//! Nodes live in an arena owned by [`CircuitGraph`](crate::CircuitGraph) and
//! refer to each other by [`NodeId`]. Edge sets are ordered so that every
//! traversal (and therefore every synthesized table) is deterministic.

use breadboard_logic::{RelativeDirection, Socket, TruthTable};
use std::collections::BTreeSet;
use std::fmt;

/// Stable index of a node inside one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a node models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A board input socket.
    Input(Socket),
    /// A board output socket.
    Output(Socket),
    /// A stretch of wire; conducts both ways, removed by reduction.
    Wire,
    /// An inverter: on exactly when none of its predecessors is.
    Torch,
    /// A nested circuit with its own table. Connected only to its own
    /// [`NodeKind::CircuitInput`] and [`NodeKind::CircuitOutput`] children.
    Circuit(TruthTable),
    /// One declared input side of a nested circuit.
    CircuitInput {
        side: RelativeDirection,
        circuit: NodeId,
    },
    /// One declared output side of a nested circuit.
    CircuitOutput {
        side: RelativeDirection,
        circuit: NodeId,
    },
}

impl NodeKind {
    /// Short lowercase name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Input(_) => "input",
            NodeKind::Output(_) => "output",
            NodeKind::Wire => "wire",
            NodeKind::Torch => "torch",
            NodeKind::Circuit(_) => "circuit",
            NodeKind::CircuitInput { .. } => "circuit_input",
            NodeKind::CircuitOutput { .. } => "circuit_output",
        }
    }
}

/// A node and its incident edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    predecessors: BTreeSet<NodeId>,
    successors: BTreeSet<NodeId>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            predecessors: BTreeSet::new(),
            successors: BTreeSet::new(),
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn predecessors(&self) -> &BTreeSet<NodeId> {
        &self.predecessors
    }

    pub fn successors(&self) -> &BTreeSet<NodeId> {
        &self.successors
    }

    pub fn is_wire(&self) -> bool {
        matches!(self.kind, NodeKind::Wire)
    }

    pub fn is_circuit(&self) -> bool {
        matches!(self.kind, NodeKind::Circuit(_))
    }

    pub(crate) fn predecessors_mut(&mut self) -> &mut BTreeSet<NodeId> {
        &mut self.predecessors
    }

    pub(crate) fn successors_mut(&mut self) -> &mut BTreeSet<NodeId> {
        &mut self.successors
    }
}
