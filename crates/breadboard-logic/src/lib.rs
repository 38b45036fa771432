//! # Breadboard Logic
//!
//! Value types shared by every stage of circuit synthesis: the four
//! horizontal sides of a board, boolean maps keyed by those sides, and the
//! canonical truth table a traced circuit is reduced to.
//!
//! ## Data model
//!
//! ```text
//! Facing                ← Absolute horizontal direction (N, E, S, W)
//!     │
//! RelativeDirection     ← Side relative to a facing (front, right, back, left)
//!     │
//! SideMap               ← One boolean per relative side (4 bits)
//!     │
//! TruthTable            ← Inputs, outputs, one BitColumn per output
//!     │
//! KnownTable            ← Static catalog of recognized signatures
//! ```

pub mod direction;
pub mod error;
pub mod known_table;
pub mod side_map;
pub mod socket;
pub mod truth_table;

pub use direction::{Facing, RelativeDirection};
pub use error::LogicError;
pub use known_table::{DEFAULT_TEXTURE, KnownTable, known_tables};
pub use side_map::SideMap;
pub use socket::{Socket, SocketState};
pub use truth_table::{BitColumn, CircuitCost, MAX_SIDES, TruthTable, TruthTableRecord};
