//! Wire elimination.
//!
//! Reduction copies every functional (non-wire) node into a fresh graph and
//! replaces each all-wire path between two functional nodes with one direct
//! edge, provided the path is short enough for a signal to survive it.

use crate::error::GraphError;
use crate::graph::{FullCircuitGraph, ReducedCircuitGraph};
use crate::node::{NodeId, NodeKind};
use std::collections::{BTreeMap, VecDeque};
use tracing::{debug, trace};

/// Longest run of wire nodes a signal can travel through.
pub const MAX_WIRE_HOPS: usize = 15;

impl FullCircuitGraph {
    /// Collapse wire chains into direct edges, consuming the graph.
    ///
    /// For every functional source `S` and every functional node `T`
    /// reachable from `S` through wires only, the reduced graph gets the
    /// edge `S -> T` when the shortest such path crosses at most
    /// [`MAX_WIRE_HOPS`] wires. `T` may be `S` itself when a wire loop
    /// leads back to it.
    pub fn reduce(self) -> Result<ReducedCircuitGraph, GraphError> {
        let nodes = self.raw_nodes();
        let mut mapping: Vec<Option<NodeId>> = vec![None; nodes.len()];
        let mut next = 0;
        for (slot, node) in mapping.iter_mut().zip(nodes) {
            if !node.is_wire() {
                *slot = Some(NodeId::new(next));
                next += 1;
            }
        }
        let remap = |id: NodeId| mapping[id.index()];

        let mut reduced = ReducedCircuitGraph::new();
        for node in nodes.iter().filter(|node| !node.is_wire()) {
            let kind = match node.kind() {
                NodeKind::CircuitInput { side, circuit } => NodeKind::CircuitInput {
                    side: *side,
                    circuit: remap(*circuit).ok_or(GraphError::NotACircuit(*circuit))?,
                },
                NodeKind::CircuitOutput { side, circuit } => NodeKind::CircuitOutput {
                    side: *side,
                    circuit: remap(*circuit).ok_or(GraphError::NotACircuit(*circuit))?,
                },
                other => other.clone(),
            };
            reduced.push_detached(kind);
        }

        let mut edges = 0usize;
        let mut dropped = 0usize;
        for source in self.nodes().map(|(id, _)| id) {
            // Wires have no mapping.
            let Some(new_source) = remap(source) else {
                continue;
            };
            for (target, distance) in self.wire_only_distances(source) {
                let Some(new_target) = remap(target) else {
                    continue;
                };
                // `distance` counts edges; the wires crossed are one fewer.
                if distance - 1 <= MAX_WIRE_HOPS {
                    reduced.connect(new_source, new_target)?;
                    edges += 1;
                } else {
                    trace!(
                        %source,
                        %target,
                        target_kind = nodes[target.index()].kind().name(),
                        distance,
                        "signal does not reach"
                    );
                    dropped += 1;
                }
            }
        }

        debug!(
            full_nodes = nodes.len(),
            kept_nodes = reduced.node_count(),
            edges,
            dropped,
            "reduced circuit graph"
        );
        Ok(reduced)
    }

    /// Breadth-first distances from `source` to every node reachable by
    /// expanding wire nodes only.
    ///
    /// Non-wire nodes are recorded at their distance but not expanded past.
    /// `source` itself appears only if a wire path loops back to it, at the
    /// length of the shortest such loop.
    pub fn wire_only_distances(&self, source: NodeId) -> BTreeMap<NodeId, usize> {
        let nodes = self.raw_nodes();
        let mut distances = BTreeMap::new();
        if source.index() >= nodes.len() {
            return distances;
        }

        distances.insert(source, 0);
        let mut self_distance = None;
        let mut queue = VecDeque::from([source]);
        while let Some(current) = queue.pop_front() {
            let next_distance = distances[&current] + 1;
            for &next in nodes[current.index()].successors() {
                if !distances.contains_key(&next) {
                    distances.insert(next, next_distance);
                    if nodes[next.index()].is_wire() {
                        queue.push_back(next);
                    }
                } else if next == source && self_distance.is_none() {
                    self_distance = Some(next_distance);
                }
            }
        }

        match self_distance {
            Some(distance) => {
                distances.insert(source, distance);
            }
            None => {
                distances.remove(&source);
            }
        }
        distances
    }
}
