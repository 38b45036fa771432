//! # Breadboard Board
//!
//! The spatial side of synthesis: finding a board in a block world,
//! tracing the components on top of it into a circuit graph, and handing
//! the graph to `breadboard-graph` for reduction and evaluation.
//!
//! ## Architecture
//!
//! ```text
//! World                 ← Block lookup, conduction, wire shapes, circuit tables
//!     │
//! Board                 ← Isolated 8x8 breadboard with four sockets
//!     │
//! GraphBuilder          ← Backward trace from output sockets
//!     │
//! FullCircuitGraph      ← reduce → is_acyclic → truth_table
//!     │
//! synthesize            ← TruthTable, or a distinct cyclic outcome
//! ```
//!
//! [`GridWorld`] is an in-memory [`World`]; [`Layout`] files describe one.

pub mod block;
pub mod board;
pub mod builder;
pub mod error;
pub mod grid;
pub mod layout;
pub mod pos;
pub mod socket;
pub mod synth;
pub mod world;

pub use block::{BlockKind, BreadboardKind};
pub use board::{BOARD_SIZE, Board};
pub use builder::GraphBuilder;
pub use error::{BoardError, BuildError, LayoutError, SynthesisError};
pub use grid::GridWorld;
pub use layout::{CircuitPlacement, Layout};
pub use pos::{BlockPos, Direction};
pub use socket::BoardSocket;
pub use synth::synthesize;
pub use world::{World, WorldMut};
