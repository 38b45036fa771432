//! Traces the components on top of a board into a [`FullCircuitGraph`].
//!
//! Tracing runs backwards: it starts at each output socket and follows
//! whatever could power the current component (wires, torches, nested
//! circuit outputs, full blocks relaying power) until it reaches input
//! sockets or dead ends. Every physical component becomes exactly one node;
//! the position-to-node map both deduplicates and guarantees termination.
//!
//! ```text
//! output socket ← wire ← wire ← torch ← solid ← wire ← input socket
//!                  ↑                        ↖
//!             circuit output ← circuit ← circuit input ← …
//! ```
//!
//! Anything outside the board area is ignored.

use crate::board::Board;
use crate::block::BlockKind;
use crate::error::BuildError;
use crate::pos::{BlockPos, Direction};
use crate::world::World;
use breadboard_graph::{FullCircuitGraph, NodeId};
use breadboard_logic::{Facing, RelativeDirection, TruthTable};
use std::collections::HashMap;
use tracing::{debug, trace};

pub struct GraphBuilder<'a> {
    world: &'a dyn World,
    board: &'a Board,
    graph: FullCircuitGraph,
    visited: HashMap<BlockPos, NodeId>,
    input_nodes: HashMap<Facing, NodeId>,
}

impl<'a> GraphBuilder<'a> {
    /// Build the full circuit graph of `board`.
    pub fn build(world: &'a dyn World, board: &'a Board) -> Result<FullCircuitGraph, BuildError> {
        let mut builder = Self {
            world,
            board,
            graph: FullCircuitGraph::new(),
            visited: HashMap::new(),
            input_nodes: HashMap::new(),
        };
        builder.prepare_inputs()?;
        builder.build_from_outputs()?;
        debug!(
            nodes = builder.graph.node_count(),
            components = builder.visited.len(),
            "built circuit graph"
        );
        Ok(builder.graph)
    }

    fn prepare_inputs(&mut self) -> Result<(), BuildError> {
        for socket in self.board.inputs() {
            let node = self.graph.add_input_node(socket.socket())?;
            self.input_nodes.insert(socket.facing(), node);
        }
        Ok(())
    }

    fn build_from_outputs(&mut self) -> Result<(), BuildError> {
        for socket in self.board.outputs() {
            let output = self.graph.add_output_node(socket.socket())?;
            for &block in socket.blocks() {
                let above = block.above();
                if self.world.block(above).is_wire() {
                    self.trace_wire(output, above)?;
                }
            }
        }
        Ok(())
    }

    /// Look up the node already created for `pos`, or create one.
    fn node_at(
        &mut self,
        pos: BlockPos,
        create: impl FnOnce(&mut FullCircuitGraph) -> Result<NodeId, BuildError>,
    ) -> Result<(NodeId, bool), BuildError> {
        match self.visited.get(&pos) {
            Some(&node) => Ok((node, true)),
            None => Ok((create(&mut self.graph)?, false)),
        }
    }

    fn trace_wire(&mut self, source: NodeId, pos: BlockPos) -> Result<(), BuildError> {
        if self.board.outside_of_board_area(pos) {
            return Ok(());
        }

        let (wire, seen) = self.node_at(pos, |graph| Ok(graph.add_wire_node()?))?;
        if self.graph.is_wire(source) {
            self.graph.connect_wire_two_way(wire, source)?;
        } else {
            self.graph.connect(wire, source)?;
        }
        if seen {
            return Ok(());
        }
        self.visited.insert(pos, wire);
        trace!(%pos, %wire, "wire");

        if let Some(input) = self.input_node_below(pos) {
            self.graph.connect(input, wire)?;
        }

        let below = pos.below();
        if self.world.conducts(below) {
            self.trace_all_powering(wire, below, true, pos)?;
        }

        let above = pos.above();
        if self.world.conducts(above) {
            self.trace_all_powering(wire, above, true, pos)?;
        } else {
            if self.world.block(above).is_torch() {
                self.trace_torch(wire, above)?;
            }
            // Wires climbing up a step.
            for direction in Direction::HORIZONTAL {
                let step_up = above.relative(direction);
                if self.world.block(step_up).is_wire() {
                    self.trace_wire(wire, step_up)?;
                }
            }
        }

        for direction in Direction::HORIZONTAL {
            let side = pos.relative(direction);
            if self.world.conducts(side) {
                self.trace_all_powering(wire, side, true, pos)?;
            } else {
                self.trace_inwards(wire, side, direction)?;
                let step_down = side.below();
                if self.world.block(step_down).is_wire() {
                    self.trace_wire(wire, step_down)?;
                }
            }
        }
        Ok(())
    }

    fn trace_torch(&mut self, source: NodeId, pos: BlockPos) -> Result<(), BuildError> {
        if self.board.outside_of_board_area(pos) {
            return Ok(());
        }

        let (torch, seen) = self.node_at(pos, |graph| Ok(graph.add_torch_node()))?;
        self.graph.connect(torch, source)?;
        if seen {
            return Ok(());
        }
        self.visited.insert(pos, torch);
        trace!(%pos, %torch, "torch");

        // The block the torch is attached to switches it off.
        let activator = match self.world.block(pos) {
            BlockKind::WallTorch { facing } => {
                pos.relative(Direction::from(facing.opposite()))
            }
            _ => pos.below(),
        };
        if self.world.conducts(activator) {
            self.trace_all_powering(torch, activator, false, pos)?;
        }
        Ok(())
    }

    fn trace_circuit_output(
        &mut self,
        source: NodeId,
        pos: BlockPos,
        facing: Facing,
        table: &TruthTable,
        side: RelativeDirection,
    ) -> Result<(), BuildError> {
        if self.board.outside_of_board_area(pos) {
            return Ok(());
        }

        let (circuit, seen) =
            self.node_at(pos, |graph| Ok(graph.add_circuit_node(table.clone())))?;
        let output = self.graph.circuit_side_output(circuit, side)?;
        self.graph.connect(output, source)?;
        if seen {
            return Ok(());
        }
        self.visited.insert(pos, circuit);
        trace!(%pos, %circuit, %side, "circuit");

        // Every input is traced, related to this output or not; evaluation
        // sorts out which ones matter.
        for (input_side, input) in self.graph.circuit_inputs(circuit)? {
            let direction = Direction::from(input_side.offset_from(facing));
            self.trace_circuit_input(input, pos.relative(direction), pos, direction)?;
        }
        Ok(())
    }

    fn trace_circuit_input(
        &mut self,
        input: NodeId,
        input_pos: BlockPos,
        circuit_pos: BlockPos,
        direction: Direction,
    ) -> Result<(), BuildError> {
        if self.board.outside_of_board_area(input_pos) {
            return Ok(());
        }

        if self.world.conducts(input_pos) {
            self.trace_all_powering(input, input_pos, false, circuit_pos)
        } else {
            self.trace_inwards(input, input_pos, direction)
        }
    }

    /// Trace everything that powers the full block at `pos`.
    ///
    /// With `strong_only`, wires next to the block are skipped: they power
    /// it only weakly, which is not enough to relay through it. `except` is
    /// the component the trace came from.
    fn trace_all_powering(
        &mut self,
        source: NodeId,
        pos: BlockPos,
        strong_only: bool,
        except: BlockPos,
    ) -> Result<(), BuildError> {
        if self.board.outside_of_board_area(pos) {
            return Ok(());
        }
        if !self.world.conducts(pos) {
            return Err(BuildError::NotAConductor(pos));
        }

        for direction in Direction::ALL {
            let neighbor = pos.relative(direction);
            if neighbor == except {
                continue;
            }
            let block = self.world.block(neighbor);

            if direction == Direction::Down {
                if block.is_torch() {
                    self.trace_torch(source, neighbor)?;
                }
                continue;
            }

            if !strong_only
                && block.is_wire()
                && (direction == Direction::Up
                    || self.world.wire_connects(neighbor, direction.opposite()))
            {
                self.trace_wire(source, neighbor)?;
            }

            if neighbor.y == pos.y && block.is_circuit() {
                if let Some(facing) = direction.opposite().as_facing() {
                    self.trace_if_has_circuit_facing(source, neighbor, facing)?;
                }
            }
        }
        Ok(())
    }

    /// Trace the component at `pos`, reached by stepping `direction` from
    /// the component being powered.
    fn trace_inwards(
        &mut self,
        source: NodeId,
        pos: BlockPos,
        direction: Direction,
    ) -> Result<(), BuildError> {
        if self.board.outside_of_board_area(pos) {
            return Ok(());
        }

        let block = self.world.block(pos);
        if block.is_wire() {
            self.trace_wire(source, pos)
        } else if block.is_torch() {
            self.trace_torch(source, pos)
        } else if block.is_circuit() {
            match direction.opposite().as_facing() {
                Some(facing) => self.trace_if_has_circuit_facing(source, pos, facing),
                None => Ok(()),
            }
        } else {
            Ok(())
        }
    }

    /// Trace the circuit at `pos` if it has an output on its side facing
    /// `toward`.
    fn trace_if_has_circuit_facing(
        &mut self,
        source: NodeId,
        pos: BlockPos,
        toward: Facing,
    ) -> Result<(), BuildError> {
        if self.board.outside_of_board_area(pos) {
            return Ok(());
        }

        let BlockKind::Circuit { facing } = self.world.block(pos) else {
            return Err(BuildError::NotACircuit(pos));
        };
        let world = self.world;
        if let Some(table) = world.circuit_table(pos) {
            let side = RelativeDirection::between(facing, toward);
            if table.has_output(side) {
                self.trace_circuit_output(source, pos, facing, table, side)?;
            }
        }
        Ok(())
    }

    fn input_node_below(&self, pos: BlockPos) -> Option<NodeId> {
        self.board
            .input_socket_at(pos.below())
            .and_then(|socket| self.input_nodes.get(&socket.facing()).copied())
    }
}
