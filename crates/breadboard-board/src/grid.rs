//! In-memory block world.

use crate::block::{BlockKind, BreadboardKind};
use crate::board::BOARD_SIZE;
use crate::pos::{BlockPos, Direction};
use crate::world::{World, WorldMut};
use breadboard_logic::{Facing, RelativeDirection, SocketState, TruthTable};
use std::collections::HashMap;

/// Sparse block map plus the tables of placed circuit blocks.
#[derive(Debug, Clone, Default)]
pub struct GridWorld {
    blocks: HashMap<BlockPos, BlockKind>,
    circuits: HashMap<BlockPos, TruthTable>,
}

impl GridWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay an 8x8 breadboard with its north-west corner at `nw_corner`.
    /// Sides not listed in `sockets` are empty.
    pub fn lay_board(&mut self, nw_corner: BlockPos, sockets: &[(Facing, SocketState)]) {
        let last = BOARD_SIZE - 1;
        let kind_for = |facing: Facing| {
            let state = sockets
                .iter()
                .find(|(side, _)| *side == facing)
                .map_or(SocketState::Empty, |(_, state)| *state);
            BreadboardKind::for_socket(facing, state)
        };

        for z in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let inner_x = x != 0 && x != last;
                let inner_z = z != 0 && z != last;
                let kind = if z == 0 && inner_x {
                    kind_for(Facing::North)
                } else if x == last && inner_z {
                    kind_for(Facing::East)
                } else if z == last && inner_x {
                    kind_for(Facing::South)
                } else if x == 0 && inner_z {
                    kind_for(Facing::West)
                } else {
                    BreadboardKind::Normal
                };
                self.blocks
                    .insert(nw_corner.offset(x, 0, z), BlockKind::Breadboard(kind));
            }
        }
    }

    /// Place a circuit block facing `facing` that computes `table`.
    pub fn place_circuit(&mut self, pos: BlockPos, facing: Facing, table: TruthTable) {
        self.blocks.insert(pos, BlockKind::Circuit { facing });
        self.circuits.insert(pos, table);
    }

    /// Whether the wire at `pos` reaches toward horizontal `direction`
    /// before the straight-line and dot rules apply.
    fn wire_reaches(&self, pos: BlockPos, direction: Direction) -> bool {
        let side = pos.relative(direction);
        match self.block(side) {
            BlockKind::Wire | BlockKind::Torch | BlockKind::WallTorch { .. } => return true,
            BlockKind::Circuit { facing } => {
                let Some(toward) = direction.opposite().as_facing() else {
                    return false;
                };
                let rel = RelativeDirection::between(facing, toward);
                return self
                    .circuits
                    .get(&side)
                    .is_some_and(|table| table.has_input_or_output(rel));
            }
            _ => {}
        }
        if !self.conducts(side) && self.block(side.below()).is_wire() {
            return true;
        }
        !self.conducts(pos.above()) && self.block(side.above()).is_wire()
    }
}

impl World for GridWorld {
    fn block(&self, pos: BlockPos) -> BlockKind {
        self.blocks.get(&pos).copied().unwrap_or_default()
    }

    fn circuit_table(&self, pos: BlockPos) -> Option<&TruthTable> {
        self.circuits.get(&pos)
    }

    /// A wire connects to adjacent components, and up or down a step to
    /// other wires. A wire with a single connection also points straight
    /// through; one with none points all four ways.
    fn wire_connects(&self, pos: BlockPos, toward: Direction) -> bool {
        if !self.block(pos).is_wire() || toward.as_facing().is_none() {
            return false;
        }
        let reaching: Vec<Direction> = Direction::HORIZONTAL
            .into_iter()
            .filter(|&direction| self.wire_reaches(pos, direction))
            .collect();
        match reaching.as_slice() {
            [] => true,
            [only] => toward == *only || toward == only.opposite(),
            _ => reaching.contains(&toward),
        }
    }
}

impl WorldMut for GridWorld {
    fn set_block(&mut self, pos: BlockPos, block: BlockKind) {
        if !block.is_circuit() {
            self.circuits.remove(&pos);
        }
        if block == BlockKind::Air {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, block);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AT: BlockPos = BlockPos::new(0, 1, 0);

    #[test]
    fn unset_blocks_are_air() {
        let world = GridWorld::new();
        assert_eq!(world.block(AT), BlockKind::Air);
        assert!(!world.conducts(AT));
        assert!(world.circuit_table(AT).is_none());
    }

    #[test]
    fn isolated_wire_points_everywhere() {
        let mut world = GridWorld::new();
        world.set_block(AT, BlockKind::Wire);
        for direction in Direction::HORIZONTAL {
            assert!(world.wire_connects(AT, direction));
        }
        assert!(!world.wire_connects(AT, Direction::Up));
    }

    #[test]
    fn single_connection_runs_straight_through() {
        let mut world = GridWorld::new();
        world.set_block(AT, BlockKind::Wire);
        world.set_block(AT.relative(Direction::West), BlockKind::Wire);
        assert!(world.wire_connects(AT, Direction::West));
        assert!(world.wire_connects(AT, Direction::East));
        assert!(!world.wire_connects(AT, Direction::North));
        assert!(!world.wire_connects(AT, Direction::South));
    }

    #[test]
    fn corner_does_not_point_past_itself() {
        let mut world = GridWorld::new();
        world.set_block(AT, BlockKind::Wire);
        world.set_block(AT.relative(Direction::West), BlockKind::Wire);
        world.set_block(AT.relative(Direction::North), BlockKind::Torch);
        assert!(world.wire_connects(AT, Direction::West));
        assert!(world.wire_connects(AT, Direction::North));
        assert!(!world.wire_connects(AT, Direction::East));
    }

    #[test]
    fn wires_step_up_and_down() {
        let mut world = GridWorld::new();
        world.set_block(AT, BlockKind::Wire);
        let east = AT.relative(Direction::East);
        world.set_block(east, BlockKind::Solid);
        world.set_block(east.above(), BlockKind::Wire);
        world.set_block(AT.relative(Direction::North).below(), BlockKind::Wire);
        world.set_block(AT.relative(Direction::South), BlockKind::Solid);

        assert!(world.wire_connects(AT, Direction::East));
        assert!(world.wire_connects(AT, Direction::North));
        assert!(!world.wire_connects(AT, Direction::South));

        world.set_block(AT.above(), BlockKind::Solid);
        assert!(!world.wire_connects(AT, Direction::East));
    }

    #[test]
    fn circuits_connect_on_used_sides_only() {
        let mut world = GridWorld::new();
        world.set_block(AT, BlockKind::Wire);
        world.set_block(AT.relative(Direction::West), BlockKind::Wire);
        let not = TruthTable::from_single_fn(
            &[RelativeDirection::Back],
            RelativeDirection::Front,
            |l| !l[0],
        )
        .expect("not");
        // Facing south: its back is the north side, toward the wire.
        world.place_circuit(AT.relative(Direction::South), Facing::South, not.clone());
        assert!(world.wire_connects(AT, Direction::South));
        assert!(world.wire_connects(AT, Direction::West));
        assert!(!world.wire_connects(AT, Direction::East));

        // Facing east: the side toward the wire is unused.
        world.place_circuit(AT.relative(Direction::South), Facing::East, not);
        assert!(!world.wire_connects(AT, Direction::South));
        assert!(world.wire_connects(AT, Direction::East));
    }

    #[test]
    fn replacing_a_circuit_drops_its_table() {
        let mut world = GridWorld::new();
        world.place_circuit(AT, Facing::North, TruthTable::empty());
        assert!(world.circuit_table(AT).is_some());
        world.set_block(AT, BlockKind::Air);
        assert!(world.circuit_table(AT).is_none());
        assert_eq!(world.block(AT), BlockKind::Air);
    }

    #[test]
    fn laid_board_has_socket_kinds() {
        let mut world = GridWorld::new();
        let nw = BlockPos::new(0, 0, 0);
        world.lay_board(nw, &[(Facing::South, SocketState::Output)]);
        assert_eq!(
            world.block(nw.offset(3, 0, 7)),
            BlockKind::Breadboard(BreadboardKind::OutputSouth)
        );
        assert_eq!(
            world.block(nw.offset(0, 0, 7)),
            BlockKind::Breadboard(BreadboardKind::Normal)
        );
        assert_eq!(
            world.block(nw.offset(7, 0, 3)),
            BlockKind::Breadboard(BreadboardKind::Normal)
        );
    }
}
