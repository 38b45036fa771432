//! Absolute and relative horizontal directions.
//!
//! A board (and every nested circuit block) has exactly four sides. Circuit
//! blocks can be rotated, so truth tables refer to their sides relative to
//! the block's facing; the board itself is canonicalized as if it faced
//! north.

use crate::error::LogicError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute horizontal direction, in clockwise order starting from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    pub fn clockwise(self) -> Facing {
        match self {
            Facing::North => Facing::East,
            Facing::East => Facing::South,
            Facing::South => Facing::West,
            Facing::West => Facing::North,
        }
    }

    pub fn counter_clockwise(self) -> Facing {
        match self {
            Facing::North => Facing::West,
            Facing::East => Facing::North,
            Facing::South => Facing::East,
            Facing::West => Facing::South,
        }
    }

    pub fn opposite(self) -> Facing {
        self.clockwise().clockwise()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Facing::North => "north",
            Facing::East => "east",
            Facing::South => "south",
            Facing::West => "west",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side of a block relative to the direction it faces.
///
/// Declaration order is significant: it defines the bit order of
/// [`SideMap`](crate::SideMap) and the compact byte encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeDirection {
    Front,
    Right,
    Back,
    Left,
}

impl RelativeDirection {
    pub const ALL: [RelativeDirection; 4] = [
        RelativeDirection::Front,
        RelativeDirection::Right,
        RelativeDirection::Back,
        RelativeDirection::Left,
    ];

    /// Position of this side in declaration order.
    pub fn index(self) -> u8 {
        match self {
            RelativeDirection::Front => 0,
            RelativeDirection::Right => 1,
            RelativeDirection::Back => 2,
            RelativeDirection::Left => 3,
        }
    }

    pub fn from_index(index: u8) -> Result<Self, LogicError> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(LogicError::DirectionIndex(index))
    }

    pub fn clockwise(self) -> RelativeDirection {
        match self {
            RelativeDirection::Front => RelativeDirection::Right,
            RelativeDirection::Right => RelativeDirection::Back,
            RelativeDirection::Back => RelativeDirection::Left,
            RelativeDirection::Left => RelativeDirection::Front,
        }
    }

    /// The absolute direction reached by turning from `facing` by this side.
    pub fn offset_from(self, facing: Facing) -> Facing {
        match self {
            RelativeDirection::Front => facing,
            RelativeDirection::Right => facing.clockwise(),
            RelativeDirection::Back => facing.opposite(),
            RelativeDirection::Left => facing.counter_clockwise(),
        }
    }

    /// The relative side that turns `from` into `to`.
    pub fn between(from: Facing, to: Facing) -> RelativeDirection {
        let mut absolute = from;
        let mut relative = RelativeDirection::Front;
        while absolute != to {
            absolute = absolute.clockwise();
            relative = relative.clockwise();
        }
        relative
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RelativeDirection::Front => "front",
            RelativeDirection::Right => "right",
            RelativeDirection::Back => "back",
            RelativeDirection::Left => "left",
        }
    }

    /// Localization key for user-facing text.
    pub fn message_key(self) -> String {
        format!("direction.{}", self.as_str())
    }

    /// Encode a list of sides as one index byte per side.
    pub fn list_to_bytes(list: &[RelativeDirection]) -> Vec<u8> {
        list.iter().map(|dir| dir.index()).collect()
    }

    /// Decode a list of sides, skipping bytes that name no side.
    pub fn list_from_bytes(bytes: &[u8]) -> Vec<RelativeDirection> {
        bytes
            .iter()
            .filter_map(|&byte| RelativeDirection::from_index(byte).ok())
            .collect()
    }
}

impl fmt::Display for RelativeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
