//! One synthesis request, from any breadboard block to a truth table.

use crate::board::Board;
use crate::error::SynthesisError;
use crate::pos::BlockPos;
use crate::world::World;
use breadboard_logic::TruthTable;
use tracing::info;

/// Resolve the board at `pos`, trace it, and synthesize its table.
///
/// A circuit with feedback yields [`SynthesisError::Cyclic`], distinct
/// from geometry and tracing failures.
pub fn synthesize(world: &dyn World, pos: BlockPos) -> Result<TruthTable, SynthesisError> {
    let board = Board::resolve(world, pos)?;
    match board.generate_truth_table(world)? {
        Some(table) => {
            info!(
                nw_corner = %board.nw_corner(),
                signature = %table.signature(),
                "synthesized board"
            );
            Ok(table)
        }
        None => {
            info!(nw_corner = %board.nw_corner(), "board circuit is cyclic");
            Err(SynthesisError::Cyclic)
        }
    }
}
