//! Cycle detection and truth-table synthesis on reduced graphs.

use crate::error::GraphError;
use crate::graph::ReducedCircuitGraph;
use crate::node::{NodeId, NodeKind};
use breadboard_logic::{BitColumn, Facing, RelativeDirection, SideMap, TruthTable};
use std::collections::HashSet;
use tracing::debug;

impl ReducedCircuitGraph {
    /// Whether no output depends on itself through a feedback loop.
    ///
    /// Walks predecessor edges depth-first from every output. Loops that no
    /// output observes do not count.
    pub fn is_acyclic(&self) -> bool {
        let nodes = self.raw_nodes();
        for &output in self.outputs() {
            let mut grey = HashSet::new();
            let mut black = HashSet::new();
            let mut stack = vec![output];

            while let Some(&current) = stack.last() {
                if grey.contains(&current) || black.contains(&current) {
                    grey.remove(&current);
                    black.insert(current);
                    stack.pop();
                    continue;
                }

                grey.insert(current);
                for &predecessor in nodes[current.index()].predecessors() {
                    if grey.contains(&predecessor) {
                        debug!(%output, %predecessor, "feedback loop found");
                        return false;
                    }
                    if !black.contains(&predecessor) {
                        stack.push(predecessor);
                    }
                }
            }
        }
        true
    }

    /// Signal on `id` when the board inputs are set to `input_set`.
    ///
    /// Bit `j` of `input_set` is the state of the `j`-th board input node.
    /// The graph must be acyclic; evaluation recurses along predecessors.
    pub fn evaluate_node(&self, id: NodeId, input_set: usize) -> Result<bool, GraphError> {
        let node = self.node(id)?;
        match node.kind() {
            NodeKind::Circuit(_) => Err(GraphError::EvaluateCircuit(id)),
            NodeKind::Wire => Err(GraphError::WireInReduced(id)),
            NodeKind::Input(_) => {
                let bit = self
                    .inputs()
                    .iter()
                    .position(|&input| input == id)
                    .ok_or(GraphError::NotAnIoNode(id))?;
                Ok(input_set & (1 << bit) != 0)
            }
            NodeKind::CircuitOutput { side, circuit } => {
                let table = self.circuit_table(*circuit)?;
                let mut input_map = SideMap::empty();
                for (input_side, input) in self.circuit_inputs(*circuit)? {
                    input_map = input_map.with(input_side, self.evaluate_node(input, input_set)?);
                }
                Ok(table.outputs_for_inputs(input_map).get(*side))
            }
            NodeKind::Output(_) | NodeKind::CircuitInput { .. } | NodeKind::Torch => {
                let mut powered = false;
                for &predecessor in node.predecessors() {
                    if self.evaluate_node(predecessor, input_set)? {
                        powered = true;
                        break;
                    }
                }
                Ok(if matches!(node.kind(), NodeKind::Torch) {
                    !powered
                } else {
                    powered
                })
            }
        }
    }

    /// Synthesize the graph's truth table.
    ///
    /// Sides are expressed as if the board faced north, so two boards
    /// wired the same way but rotated get tables with equal signatures.
    /// Fails with [`GraphError::Cyclic`] when [`is_acyclic`] is false;
    /// check that first.
    ///
    /// [`is_acyclic`]: ReducedCircuitGraph::is_acyclic
    pub fn truth_table(&self) -> Result<TruthTable, GraphError> {
        if !self.is_acyclic() {
            return Err(GraphError::Cyclic);
        }

        let inputs = self.canonical_sides(self.inputs())?;
        let outputs = self.canonical_sides(self.outputs())?;
        let mut mappings = vec![BitColumn::default(); outputs.len()];
        for input_set in 0..1usize << inputs.len() {
            for (column, &output) in mappings.iter_mut().zip(self.outputs()) {
                *column = column.with(input_set, self.evaluate_node(output, input_set)?);
            }
        }

        let table = TruthTable::new(inputs, outputs, mappings)?;
        debug!(signature = %table.signature(), "synthesized truth table");
        Ok(table)
    }

    fn canonical_sides(&self, ids: &[NodeId]) -> Result<Vec<RelativeDirection>, GraphError> {
        ids.iter()
            .map(|&id| {
                self.io_direction(id)
                    .map(|facing| RelativeDirection::between(Facing::North, facing))
            })
            .collect()
    }
}
