//! Error types for the spatial layer.

use crate::pos::BlockPos;
use breadboard_graph::GraphError;
use std::path::PathBuf;

/// Geometry failures while resolving a board from one of its blocks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The starting block is not a breadboard.
    #[error("block at {pos} is not a breadboard")]
    TargetIsntBreadboard { pos: BlockPos },

    /// Breadboard blocks touch the board from outside its 8x8 area.
    #[error("board is not isolated near {pos}")]
    BoardNotIsolated { pos: BlockPos },

    /// The 8x8 area below the north-west corner is not all breadboard.
    #[error("board is not 8x8: missing breadboard at {pos}")]
    GridDimensionsIncorrect { pos: BlockPos },

    /// Socket blocks disagree, or an interior block is styled as a socket.
    #[error("breadboard block states are inconsistent at {pos}")]
    BoardStatesBroken { pos: BlockPos },
}

impl BoardError {
    /// Machine-readable reason code.
    pub fn reason_code(&self) -> &'static str {
        match self {
            BoardError::TargetIsntBreadboard { .. } => "target_isnt_breadboard",
            BoardError::BoardNotIsolated { .. } => "board_not_isolated",
            BoardError::GridDimensionsIncorrect { .. } => "grid_dimensions_incorrect",
            BoardError::BoardStatesBroken { .. } => "board_states_broken",
        }
    }

    /// Localization key for the user-facing message.
    pub fn message_key(&self) -> String {
        format!("board.error.{}", self.reason_code())
    }
}

/// Failures while tracing a board into a circuit graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Powering was traced through a block that does not conduct.
    #[error("block at {0} does not conduct")]
    NotAConductor(BlockPos),

    /// A circuit output was traced at a block that is not a circuit.
    #[error("block at {0} is not a circuit")]
    NotACircuit(BlockPos),
}

/// Outcome of a synthesis request that produced no table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SynthesisError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Build(#[from] BuildError),

    /// The circuit has feedback. An expected outcome, not a fault.
    #[error("circuit contains a feedback loop")]
    Cyclic,
}

impl SynthesisError {
    /// Localization key for the user-facing message.
    pub fn message_key(&self) -> String {
        match self {
            SynthesisError::Board(error) => error.message_key(),
            SynthesisError::Build(_) => "synthesis.error.internal".to_string(),
            SynthesisError::Cyclic => "synthesis.error.cyclic".to_string(),
        }
    }
}

/// Failures while loading a layout file.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON layout: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML layout: {0}")]
    Toml(#[from] toml::de::Error),

    /// A layer does not have exactly eight rows.
    #[error("layer {layer} has {count} rows, expected 8")]
    RowCount { layer: usize, count: usize },

    /// A row does not have exactly eight glyphs.
    #[error("layer {layer} row {row} has {width} glyphs, expected 8")]
    RowWidth {
        layer: usize,
        row: usize,
        width: usize,
    },

    #[error("unknown glyph {glyph:?} at layer {layer} row {row} column {column}")]
    UnknownGlyph {
        layer: usize,
        row: usize,
        column: usize,
        glyph: char,
    },

    /// A `C` glyph with no matching `[[circuits]]` entry.
    #[error("no circuit defined for layer {layer} row {row} column {column}")]
    MissingCircuit {
        layer: usize,
        row: usize,
        column: usize,
    },

    /// Two `[[circuits]]` entries for the same cell.
    #[error("more than one circuit defined for layer {layer} row {row} column {column}")]
    DuplicateCircuit {
        layer: usize,
        row: usize,
        column: usize,
    },

    /// The board or its layers would leave the addressable world.
    #[error("origin {origin} is out of range")]
    OriginOutOfRange { origin: BlockPos },

    /// A `[[circuits]]` entry whose cell does not hold a `C` glyph.
    #[error("circuit at layer {layer} row {row} column {column} has no C glyph")]
    StrayCircuit {
        layer: usize,
        row: usize,
        column: usize,
    },
}
