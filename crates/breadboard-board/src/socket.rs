//! One side of a board and the breadboard blocks it consists of.

use crate::block::{BlockKind, BreadboardKind};
use crate::pos::BlockPos;
use crate::world::WorldMut;
use breadboard_logic::{Facing, Socket, SocketState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSocket {
    facing: Facing,
    blocks: Vec<BlockPos>,
    state: SocketState,
}

impl BoardSocket {
    pub fn new(facing: Facing, blocks: Vec<BlockPos>, state: SocketState) -> Self {
        Self {
            facing,
            blocks,
            state,
        }
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn blocks(&self) -> &[BlockPos] {
        &self.blocks
    }

    pub fn state(&self) -> SocketState {
        self.state
    }

    /// The logical socket, as graph input and output nodes take it.
    pub fn socket(&self) -> Socket {
        Socket::new(self.facing, self.state)
    }

    pub fn contains_block(&self, pos: BlockPos) -> bool {
        self.blocks.contains(&pos)
    }

    /// Change the state and restyle the socket's breadboard blocks to match.
    pub fn set_state(&mut self, state: SocketState, world: &mut dyn WorldMut) {
        self.state = state;
        let kind = BreadboardKind::for_socket(self.facing, state);
        for &pos in &self.blocks {
            if world.block(pos).is_breadboard() {
                world.set_block(pos, BlockKind::Breadboard(kind));
            }
        }
    }
}
