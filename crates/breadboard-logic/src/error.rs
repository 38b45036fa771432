//! Error types for logic primitives.

use crate::direction::RelativeDirection;

/// Errors raised while constructing or decoding logic values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogicError {
    /// A side appears twice in the input or output list.
    #[error("duplicate side: {0}")]
    DuplicateSide(RelativeDirection),

    /// A side is declared both as an input and as an output.
    #[error("side {0} is both an input and an output")]
    OverlappingSide(RelativeDirection),

    /// Inputs and outputs together exceed the four sides of a board.
    #[error("table declares {count} sides, at most 4 are available")]
    TooManySides { count: usize },

    /// The number of mappings does not match the number of outputs.
    #[error("expected {expected} mappings (one per output), got {actual}")]
    MappingCountMismatch { expected: usize, actual: usize },

    /// A mapping does not have exactly one row per input assignment.
    #[error("mapping {index} has {actual} rows, expected {expected}")]
    MappingWidth {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// A socket state number outside of 0..=2.
    #[error("incorrect socket state number: {0}")]
    SocketStateNumber(i32),

    /// A relative direction index outside of 0..=3.
    #[error("incorrect relative direction index: {0}")]
    DirectionIndex(u8),
}
