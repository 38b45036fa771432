//! What can occupy a block position.

use breadboard_logic::{Facing, SocketState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Look of a breadboard block: plain, or part of an input/output socket
/// on one side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreadboardKind {
    #[default]
    Normal,
    InputNorth,
    InputEast,
    InputSouth,
    InputWest,
    OutputNorth,
    OutputEast,
    OutputSouth,
    OutputWest,
}

impl BreadboardKind {
    pub fn state(self) -> SocketState {
        match self {
            BreadboardKind::Normal => SocketState::Empty,
            BreadboardKind::InputNorth
            | BreadboardKind::InputEast
            | BreadboardKind::InputSouth
            | BreadboardKind::InputWest => SocketState::Input,
            BreadboardKind::OutputNorth
            | BreadboardKind::OutputEast
            | BreadboardKind::OutputSouth
            | BreadboardKind::OutputWest => SocketState::Output,
        }
    }

    /// The kind every block of a socket on side `facing` takes in `state`.
    pub fn for_socket(facing: Facing, state: SocketState) -> Self {
        match (state, facing) {
            (SocketState::Empty, _) => BreadboardKind::Normal,
            (SocketState::Input, Facing::North) => BreadboardKind::InputNorth,
            (SocketState::Input, Facing::East) => BreadboardKind::InputEast,
            (SocketState::Input, Facing::South) => BreadboardKind::InputSouth,
            (SocketState::Input, Facing::West) => BreadboardKind::InputWest,
            (SocketState::Output, Facing::North) => BreadboardKind::OutputNorth,
            (SocketState::Output, Facing::East) => BreadboardKind::OutputEast,
            (SocketState::Output, Facing::South) => BreadboardKind::OutputSouth,
            (SocketState::Output, Facing::West) => BreadboardKind::OutputWest,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BreadboardKind::Normal => "normal",
            BreadboardKind::InputNorth => "input_north",
            BreadboardKind::InputEast => "input_east",
            BreadboardKind::InputSouth => "input_south",
            BreadboardKind::InputWest => "input_west",
            BreadboardKind::OutputNorth => "output_north",
            BreadboardKind::OutputEast => "output_east",
            BreadboardKind::OutputSouth => "output_south",
            BreadboardKind::OutputWest => "output_west",
        }
    }
}

impl fmt::Display for BreadboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Block at a position, as far as circuit tracing cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlockKind {
    #[default]
    Air,
    /// Any full block that conducts power.
    Solid,
    Breadboard(BreadboardKind),
    Wire,
    /// Torch standing on the block below it.
    Torch,
    /// Torch attached to the side of a block, pointing `facing` away from it.
    WallTorch { facing: Facing },
    /// Nested circuit block. Its table is looked up separately.
    Circuit { facing: Facing },
}

impl BlockKind {
    /// Whether the block is a full block that relays power.
    pub fn conducts(self) -> bool {
        matches!(self, BlockKind::Solid | BlockKind::Breadboard(_))
    }

    pub fn is_wire(self) -> bool {
        matches!(self, BlockKind::Wire)
    }

    /// Standing or wall-mounted torch.
    pub fn is_torch(self) -> bool {
        matches!(self, BlockKind::Torch | BlockKind::WallTorch { .. })
    }

    pub fn is_circuit(self) -> bool {
        matches!(self, BlockKind::Circuit { .. })
    }

    pub fn is_breadboard(self) -> bool {
        matches!(self, BlockKind::Breadboard(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_states() {
        assert_eq!(BreadboardKind::Normal.state(), SocketState::Empty);
        assert_eq!(BreadboardKind::InputEast.state(), SocketState::Input);
        assert_eq!(BreadboardKind::InputNorth.state(), SocketState::Input);
        assert_eq!(BreadboardKind::OutputSouth.state(), SocketState::Output);
        assert_eq!(BreadboardKind::OutputWest.state(), SocketState::Output);
    }

    #[test]
    fn kind_for_socket() {
        assert_eq!(
            BreadboardKind::for_socket(Facing::North, SocketState::Output),
            BreadboardKind::OutputNorth
        );
        for facing in Facing::ALL {
            assert_eq!(
                BreadboardKind::for_socket(facing, SocketState::Empty),
                BreadboardKind::Normal
            );
            for state in [SocketState::Input, SocketState::Output] {
                assert_eq!(BreadboardKind::for_socket(facing, state).state(), state);
            }
        }
    }

    #[test]
    fn serialized_names() {
        let names: Vec<String> = [
            BreadboardKind::Normal,
            BreadboardKind::InputNorth,
            BreadboardKind::InputEast,
            BreadboardKind::InputSouth,
            BreadboardKind::InputWest,
            BreadboardKind::OutputNorth,
            BreadboardKind::OutputEast,
            BreadboardKind::OutputSouth,
            BreadboardKind::OutputWest,
        ]
        .iter()
        .map(|kind| {
            let json = serde_json::to_string(kind).expect("serialize");
            assert_eq!(json.trim_matches('"'), kind.as_str());
            kind.to_string()
        })
        .collect();
        insta::assert_snapshot!(names.join(","), @"normal,input_north,input_east,input_south,input_west,output_north,output_east,output_south,output_west");
    }
}
