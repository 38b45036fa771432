//! The spatial collaborator the builder and the board resolver query.

use crate::block::BlockKind;
use crate::pos::{BlockPos, Direction};
use breadboard_logic::TruthTable;

/// Read access to blocks around a board.
///
/// Positions nobody placed anything at are [`BlockKind::Air`].
pub trait World {
    fn block(&self, pos: BlockPos) -> BlockKind;

    /// Table stored in the circuit block at `pos`, if any.
    fn circuit_table(&self, pos: BlockPos) -> Option<&TruthTable>;

    /// Whether the wire at `pos` visibly connects toward `toward`.
    /// False when there is no wire at `pos`.
    fn wire_connects(&self, pos: BlockPos, toward: Direction) -> bool;

    /// Whether the block at `pos` relays power from and to its neighbors.
    fn conducts(&self, pos: BlockPos) -> bool {
        self.block(pos).conducts()
    }
}

/// A world whose blocks can be replaced.
pub trait WorldMut: World {
    fn set_block(&mut self, pos: BlockPos, block: BlockKind);
}
