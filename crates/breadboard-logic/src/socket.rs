//! Board sockets: one classification per board side.

use crate::direction::Facing;
use crate::error::LogicError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a board side (or a side of a nested circuit) is used for.
///
/// The numeric form (0, 1, 2) is what gets exchanged with UI containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocketState {
    #[default]
    Empty,
    Input,
    Output,
}

impl SocketState {
    pub fn number(self) -> i32 {
        match self {
            SocketState::Empty => 0,
            SocketState::Input => 1,
            SocketState::Output => 2,
        }
    }

    pub fn from_number(number: i32) -> Result<Self, LogicError> {
        match number {
            0 => Ok(SocketState::Empty),
            1 => Ok(SocketState::Input),
            2 => Ok(SocketState::Output),
            other => Err(LogicError::SocketStateNumber(other)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SocketState::Empty => "empty",
            SocketState::Input => "input",
            SocketState::Output => "output",
        }
    }
}

impl fmt::Display for SocketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The logical part of a board socket: which side, and in which role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Socket {
    pub facing: Facing,
    pub state: SocketState,
}

impl Socket {
    pub fn new(facing: Facing, state: SocketState) -> Self {
        Self { facing, state }
    }

    pub fn input(facing: Facing) -> Self {
        Self::new(facing, SocketState::Input)
    }

    pub fn output(facing: Facing) -> Self {
        Self::new(facing, SocketState::Output)
    }
}
