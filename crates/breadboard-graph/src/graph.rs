//! The circuit graph arena and its construction rules.
//!
//! A graph goes through two stages. A [`FullCircuitGraph`] is what the
//! builder produces: it may hold wire nodes, and wires are connected both
//! ways, so it is full of trivial two-cycles. [`reduce`] turns it into a
//! [`ReducedCircuitGraph`], which holds no wires; any cycle left there is
//! genuine feedback.
//!
//! [`reduce`]: CircuitGraph::reduce

use crate::error::GraphError;
use crate::node::{Node, NodeId, NodeKind};
use breadboard_logic::{Facing, RelativeDirection, Socket, SocketState, TruthTable};
use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Full {}
    impl Sealed for super::Reduced {}
}

/// Stage marker of a [`CircuitGraph`].
pub trait Stage: sealed::Sealed {
    /// Whether graphs in this stage may hold wire nodes.
    const ALLOWS_WIRES: bool;
}

/// Freshly built graph; may contain wires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Full;

/// Graph after wire elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reduced;

impl Stage for Full {
    const ALLOWS_WIRES: bool = true;
}

impl Stage for Reduced {
    const ALLOWS_WIRES: bool = false;
}

pub type FullCircuitGraph = CircuitGraph<Full>;
pub type ReducedCircuitGraph = CircuitGraph<Reduced>;

/// Arena of nodes plus the ordered lists of board input and output nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitGraph<S: Stage> {
    nodes: Vec<Node>,
    inputs: Vec<NodeId>,
    outputs: Vec<NodeId>,
    stage: PhantomData<S>,
}

impl<S: Stage> Default for CircuitGraph<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Stage> CircuitGraph<S> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            stage: PhantomData,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, GraphError> {
        self.nodes.get(id.index()).ok_or(GraphError::NodeOutOfRange {
            id,
            len: self.nodes.len(),
        })
    }

    /// All nodes with their ids, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId::new(index), node))
    }

    /// Board input nodes in insertion order.
    pub fn inputs(&self) -> &[NodeId] {
        &self.inputs
    }

    /// Board output nodes in insertion order.
    pub fn outputs(&self) -> &[NodeId] {
        &self.outputs
    }

    pub fn add_input_node(&mut self, socket: Socket) -> Result<NodeId, GraphError> {
        expect_state(socket, SocketState::Input)?;
        let id = self.push(NodeKind::Input(socket));
        self.inputs.push(id);
        Ok(id)
    }

    pub fn add_output_node(&mut self, socket: Socket) -> Result<NodeId, GraphError> {
        expect_state(socket, SocketState::Output)?;
        let id = self.push(NodeKind::Output(socket));
        self.outputs.push(id);
        Ok(id)
    }

    pub fn add_wire_node(&mut self) -> Result<NodeId, GraphError> {
        if !S::ALLOWS_WIRES {
            return Err(GraphError::UnsupportedOnReduced {
                operation: "add_wire_node",
            });
        }
        Ok(self.push(NodeKind::Wire))
    }

    pub fn add_torch_node(&mut self) -> NodeId {
        self.push(NodeKind::Torch)
    }

    /// Add a nested circuit together with one child node per declared side.
    ///
    /// Children are wired immediately (`CircuitInput -> Circuit` and
    /// `Circuit -> CircuitOutput`); the caller connects external signals to
    /// the children, never to the circuit itself. Returns the circuit's id.
    pub fn add_circuit_node(&mut self, table: TruthTable) -> NodeId {
        let inputs = table.inputs().to_vec();
        let outputs = table.outputs().to_vec();
        let circuit = self.push(NodeKind::Circuit(table));
        for side in inputs {
            let child = self.push(NodeKind::CircuitInput { side, circuit });
            self.insert_edge(child, circuit);
        }
        for side in outputs {
            let child = self.push(NodeKind::CircuitOutput { side, circuit });
            self.insert_edge(circuit, child);
        }
        circuit
    }

    /// The output child of `circuit` on `side`.
    pub fn circuit_side_output(
        &self,
        circuit: NodeId,
        side: RelativeDirection,
    ) -> Result<NodeId, GraphError> {
        let node = self.node(circuit)?;
        if !node.is_circuit() {
            return Err(GraphError::NotACircuit(circuit));
        }
        node.successors()
            .iter()
            .copied()
            .find(|&child| {
                matches!(
                    self.nodes[child.index()].kind(),
                    NodeKind::CircuitOutput { side: output_side, .. } if *output_side == side
                )
            })
            .ok_or(GraphError::MissingCircuitOutput { circuit, side })
    }

    /// The input children of `circuit` with their sides, in id order.
    pub fn circuit_inputs(
        &self,
        circuit: NodeId,
    ) -> Result<Vec<(RelativeDirection, NodeId)>, GraphError> {
        let node = self.node(circuit)?;
        if !node.is_circuit() {
            return Err(GraphError::NotACircuit(circuit));
        }
        Ok(node
            .predecessors()
            .iter()
            .filter_map(|&child| match self.nodes[child.index()].kind() {
                NodeKind::CircuitInput { side, .. } => Some((*side, child)),
                _ => None,
            })
            .collect())
    }

    /// The embedded table of a circuit node.
    pub fn circuit_table(&self, circuit: NodeId) -> Result<&TruthTable, GraphError> {
        match self.node(circuit)?.kind() {
            NodeKind::Circuit(table) => Ok(table),
            _ => Err(GraphError::NotACircuit(circuit)),
        }
    }

    /// Add the directed edge `from -> to`.
    ///
    /// Nested circuits are sealed: a circuit node only feeds its own output
    /// children, only its own input children feed it, and those children
    /// connect to nothing else on the circuit side.
    pub fn connect(&mut self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
        let from_kind = self.node(from)?.kind();
        let to_kind = self.node(to)?.kind();
        let illegal = |reason| GraphError::IllegalConnection { from, to, reason };

        match (from_kind, to_kind) {
            (NodeKind::Circuit(_), NodeKind::CircuitOutput { circuit, .. }) if *circuit == from => {}
            (NodeKind::Circuit(_), _) => {
                return Err(illegal("a circuit only feeds its own outputs"));
            }
            (NodeKind::CircuitInput { circuit, .. }, NodeKind::Circuit(_)) if *circuit == to => {}
            (_, NodeKind::Circuit(_)) => {
                return Err(illegal("a circuit is only fed by its own inputs"));
            }
            (NodeKind::CircuitInput { .. }, _) => {
                return Err(illegal("a circuit input only feeds its circuit"));
            }
            (_, NodeKind::CircuitOutput { .. }) => {
                return Err(illegal("a circuit output is only fed by its circuit"));
            }
            _ => {}
        }

        self.insert_edge(from, to);
        Ok(())
    }

    /// Connect two wires in both directions.
    pub fn connect_wire_two_way(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
        if !S::ALLOWS_WIRES {
            return Err(GraphError::UnsupportedOnReduced {
                operation: "connect_wire_two_way",
            });
        }
        for id in [a, b] {
            if !self.node(id)?.is_wire() {
                return Err(GraphError::NotAWire(id));
            }
        }
        self.insert_edge(a, b);
        self.insert_edge(b, a);
        Ok(())
    }

    pub fn is_wire(&self, id: NodeId) -> bool {
        self.node(id).is_ok_and(Node::is_wire)
    }

    pub fn is_circuit(&self, id: NodeId) -> bool {
        self.node(id).is_ok_and(Node::is_circuit)
    }

    /// Absolute facing of a board input or output node's socket.
    pub fn io_direction(&self, id: NodeId) -> Result<Facing, GraphError> {
        match self.node(id)?.kind() {
            NodeKind::Input(socket) | NodeKind::Output(socket) => Ok(socket.facing),
            _ => Err(GraphError::NotAnIoNode(id)),
        }
    }

    /// Append a node copied from another graph. Edges are not copied.
    pub(crate) fn push_detached(&mut self, kind: NodeKind) -> NodeId {
        let id = self.push(kind);
        match self.nodes[id.index()].kind() {
            NodeKind::Input(_) => self.inputs.push(id),
            NodeKind::Output(_) => self.outputs.push(id),
            _ => {}
        }
        id
    }

    pub(crate) fn raw_nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(kind));
        id
    }

    fn insert_edge(&mut self, from: NodeId, to: NodeId) {
        self.nodes[from.index()].successors_mut().insert(to);
        self.nodes[to.index()].predecessors_mut().insert(from);
    }
}

fn expect_state(socket: Socket, expected: SocketState) -> Result<(), GraphError> {
    if socket.state == expected {
        Ok(())
    } else {
        Err(GraphError::SocketStateMismatch {
            expected,
            actual: socket.state,
        })
    }
}
