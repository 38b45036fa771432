//! # Breadboard Graph
//!
//! The intermediate representation between a traced board and its truth
//! table. A builder fills a [`FullCircuitGraph`]; [`reduce`] eliminates the
//! wires; the [`ReducedCircuitGraph`] is checked for feedback and then
//! evaluated for every input assignment.
//!
//! ## Pipeline
//!
//! ```text
//! FullCircuitGraph      ← Inputs, outputs, wires, torches, nested circuits
//!     │ reduce()
//! ReducedCircuitGraph   ← Functional nodes only; edges within 15 wire hops
//!     │ is_acyclic()
//!     │ truth_table()
//! TruthTable            ← Canonical, as if the board faced north
//! ```
//!
//! Nodes live in one arena per graph and refer to each other by [`NodeId`].
//!
//! [`reduce`]: CircuitGraph::reduce

pub mod error;
pub mod eval;
pub mod graph;
pub mod node;
pub mod reduce;

pub use error::GraphError;
pub use graph::{CircuitGraph, Full, FullCircuitGraph, Reduced, ReducedCircuitGraph, Stage};
pub use node::{Node, NodeId, NodeKind};
pub use reduce::MAX_WIRE_HOPS;
