//! Board geometry.
//!
//! A board is an isolated 8x8 square of breadboard blocks. The six
//! non-corner blocks along each edge form that side's socket; every block
//! of a socket shares one [`BreadboardKind`], which encodes whether the
//! side is an input, an output, or unused. Everything above the square
//! (any greater `y`) is the board area the builder traces.

use crate::block::{BlockKind, BreadboardKind};
use crate::builder::GraphBuilder;
use crate::error::{BoardError, BuildError};
use crate::pos::{BlockPos, Direction};
use crate::socket::BoardSocket;
use crate::world::{World, WorldMut};
use breadboard_logic::{Facing, SocketState, TruthTable};
use std::collections::BTreeMap;
use tracing::debug;

/// Edge length of a board, in blocks.
pub const BOARD_SIZE: i32 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    nw_corner: BlockPos,
    /// One socket per facing, in [`Facing::ALL`] order.
    sockets: Vec<BoardSocket>,
}

impl Board {
    /// Resolve the board containing the breadboard block at `pos`.
    pub fn resolve(world: &dyn World, pos: BlockPos) -> Result<Self, BoardError> {
        if !world.block(pos).is_breadboard() {
            return Err(BoardError::TargetIsntBreadboard { pos });
        }

        // Both walk orders reach the same corner only on a rectangle.
        let nw_corner = walk(world, walk(world, pos, Direction::North), Direction::West);
        let wn_corner = walk(world, walk(world, pos, Direction::West), Direction::North);
        if nw_corner != wn_corner {
            return Err(BoardError::BoardNotIsolated { pos: nw_corner });
        }

        let last = BOARD_SIZE - 1;
        let is_inner = |coord: i32| coord != 0 && coord != last;
        let mut sides: BTreeMap<Facing, (Vec<BlockPos>, Option<BreadboardKind>)> = BTreeMap::new();

        for z in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let current = nw_corner.offset(x, 0, z);
                let BlockKind::Breadboard(kind) = world.block(current) else {
                    return Err(BoardError::GridDimensionsIncorrect { pos: current });
                };

                let mut side = None;
                for (on_edge, facing, inner) in [
                    (z == 0, Facing::North, is_inner(x)),
                    (x == last, Facing::East, is_inner(z)),
                    (z == last, Facing::South, is_inner(x)),
                    (x == 0, Facing::West, is_inner(z)),
                ] {
                    if !on_edge {
                        continue;
                    }
                    if inner {
                        side = Some(facing);
                    }
                    if world
                        .block(current.relative(Direction::from(facing)))
                        .is_breadboard()
                    {
                        return Err(BoardError::BoardNotIsolated { pos: current });
                    }
                }

                match side {
                    Some(facing) => {
                        let (blocks, side_kind) = sides.entry(facing).or_default();
                        blocks.push(current);
                        match *side_kind {
                            Some(expected) if expected != kind => {
                                return Err(BoardError::BoardStatesBroken { pos: current });
                            }
                            Some(_) => {}
                            None => *side_kind = Some(kind),
                        }
                    }
                    None if kind != BreadboardKind::Normal => {
                        return Err(BoardError::BoardStatesBroken { pos: current });
                    }
                    None => {}
                }
            }
        }

        let sockets = Facing::ALL
            .iter()
            .map(|&facing| {
                let (blocks, kind) = sides.remove(&facing).unwrap_or_default();
                BoardSocket::new(facing, blocks, kind.unwrap_or_default().state())
            })
            .collect();

        debug!(%nw_corner, "resolved board");
        Ok(Self { nw_corner, sockets })
    }

    pub fn nw_corner(&self) -> BlockPos {
        self.nw_corner
    }

    /// All four sockets, clockwise from north.
    pub fn sockets(&self) -> &[BoardSocket] {
        &self.sockets
    }

    pub fn socket(&self, facing: Facing) -> &BoardSocket {
        &self.sockets[slot(facing)]
    }

    pub fn inputs(&self) -> impl Iterator<Item = &BoardSocket> {
        self.sockets_with_state(SocketState::Input)
    }

    pub fn outputs(&self) -> impl Iterator<Item = &BoardSocket> {
        self.sockets_with_state(SocketState::Output)
    }

    /// The input socket whose breadboard block is at `pos`.
    pub fn input_socket_at(&self, pos: BlockPos) -> Option<&BoardSocket> {
        self.inputs().find(|socket| socket.contains_block(pos))
    }

    /// Whether `pos` lies outside the column of space above the board.
    pub fn outside_of_board_area(&self, pos: BlockPos) -> bool {
        let nw = self.nw_corner;
        let span = |start: i32| start..start.saturating_add(BOARD_SIZE);
        pos.y <= nw.y || !span(nw.x).contains(&pos.x) || !span(nw.z).contains(&pos.z)
    }

    /// Change a side's state, restyling its breadboard blocks in `world`.
    pub fn set_side_state(&mut self, world: &mut dyn WorldMut, facing: Facing, state: SocketState) {
        debug!(%facing, %state, "setting side state");
        self.sockets[slot(facing)].set_state(state, world);
    }

    /// Trace, reduce, and evaluate the circuit on this board.
    ///
    /// `Ok(None)` means the circuit has a feedback loop.
    pub fn generate_truth_table(
        &self,
        world: &dyn World,
    ) -> Result<Option<TruthTable>, BuildError> {
        let reduced = GraphBuilder::build(world, self)?.reduce()?;
        if reduced.is_acyclic() {
            Ok(Some(reduced.truth_table()?))
        } else {
            Ok(None)
        }
    }

    fn sockets_with_state(&self, state: SocketState) -> impl Iterator<Item = &BoardSocket> {
        self.sockets
            .iter()
            .filter(move |socket| socket.state() == state)
    }
}

fn slot(facing: Facing) -> usize {
    match facing {
        Facing::North => 0,
        Facing::East => 1,
        Facing::South => 2,
        Facing::West => 3,
    }
}

/// Follow breadboard blocks from `pos` in `direction` as far as they go.
fn walk(world: &dyn World, mut pos: BlockPos, direction: Direction) -> BlockPos {
    while world.block(pos.relative(direction)).is_breadboard() {
        pos = pos.relative(direction);
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridWorld;

    const ORIGIN: BlockPos = BlockPos::new(10, 64, -20);

    fn world_with_board() -> GridWorld {
        let mut world = GridWorld::new();
        world.lay_board(
            ORIGIN,
            &[
                (Facing::East, SocketState::Input),
                (Facing::West, SocketState::Input),
                (Facing::North, SocketState::Output),
            ],
        );
        world
    }

    #[test]
    fn resolves_from_any_block() {
        let world = world_with_board();
        for pos in [ORIGIN, ORIGIN.offset(7, 0, 7), ORIGIN.offset(3, 0, 5)] {
            let board = Board::resolve(&world, pos).expect("valid board");
            assert_eq!(board.nw_corner(), ORIGIN);
        }
    }

    #[test]
    fn sockets_follow_block_kinds() {
        let board = Board::resolve(&world_with_board(), ORIGIN).expect("valid board");
        let inputs: Vec<Facing> = board.inputs().map(BoardSocket::facing).collect();
        let outputs: Vec<Facing> = board.outputs().map(BoardSocket::facing).collect();
        assert_eq!(inputs, vec![Facing::East, Facing::West]);
        assert_eq!(outputs, vec![Facing::North]);
        assert_eq!(board.socket(Facing::South).state(), SocketState::Empty);
        for socket in board.sockets() {
            assert_eq!(socket.blocks().len(), 6);
        }
        assert!(board.socket(Facing::North).contains_block(ORIGIN.offset(3, 0, 0)));
        assert!(!board.socket(Facing::North).contains_block(ORIGIN));
        assert_eq!(
            board.input_socket_at(ORIGIN.offset(7, 0, 2)).map(BoardSocket::facing),
            Some(Facing::East)
        );
        assert!(board.input_socket_at(ORIGIN.offset(3, 0, 0)).is_none());
    }

    #[test]
    fn board_area() {
        let board = Board::resolve(&world_with_board(), ORIGIN).expect("valid board");
        assert!(board.outside_of_board_area(ORIGIN));
        assert!(!board.outside_of_board_area(ORIGIN.above()));
        assert!(!board.outside_of_board_area(ORIGIN.offset(7, 30, 7)));
        assert!(board.outside_of_board_area(ORIGIN.offset(8, 1, 0)));
        assert!(board.outside_of_board_area(ORIGIN.offset(0, 1, -1)));
        assert!(board.outside_of_board_area(ORIGIN.offset(-1, 1, 3)));
        assert!(board.outside_of_board_area(ORIGIN.offset(3, 1, 8)));
    }

    #[test]
    fn target_must_be_breadboard() {
        let world = world_with_board();
        let error = Board::resolve(&world, ORIGIN.above()).expect_err("air");
        assert_eq!(error.reason_code(), "target_isnt_breadboard");
        assert_eq!(error.message_key(), "board.error.target_isnt_breadboard");
    }

    #[test]
    fn neighbors_break_isolation() {
        let mut world = world_with_board();
        world.set_block(
            ORIGIN.offset(8, 0, 3),
            BlockKind::Breadboard(BreadboardKind::Normal),
        );
        let error = Board::resolve(&world, ORIGIN).expect_err("touching block");
        assert_eq!(error.reason_code(), "board_not_isolated");
    }

    #[test]
    fn l_shape_is_not_isolated() {
        let mut world = world_with_board();
        world.set_block(
            ORIGIN.offset(-1, 0, 7),
            BlockKind::Breadboard(BreadboardKind::Normal),
        );
        let error = Board::resolve(&world, ORIGIN.offset(3, 0, 7)).expect_err("l shape");
        assert_eq!(error.reason_code(), "board_not_isolated");
    }

    #[test]
    fn holes_break_dimensions() {
        let mut world = world_with_board();
        world.set_block(ORIGIN.offset(4, 0, 4), BlockKind::Solid);
        let error = Board::resolve(&world, ORIGIN).expect_err("hole");
        assert_eq!(
            error,
            BoardError::GridDimensionsIncorrect {
                pos: ORIGIN.offset(4, 0, 4)
            }
        );
    }

    #[test]
    fn too_small_board() {
        let mut world = GridWorld::new();
        for z in 0..5 {
            for x in 0..5 {
                world.set_block(
                    ORIGIN.offset(x, 0, z),
                    BlockKind::Breadboard(BreadboardKind::Normal),
                );
            }
        }
        let error = Board::resolve(&world, ORIGIN).expect_err("5x5");
        assert_eq!(error.reason_code(), "grid_dimensions_incorrect");
    }

    #[test]
    fn mixed_socket_kinds_break_states() {
        let mut world = world_with_board();
        world.set_block(
            ORIGIN.offset(7, 0, 4),
            BlockKind::Breadboard(BreadboardKind::OutputEast),
        );
        let error = Board::resolve(&world, ORIGIN).expect_err("mixed east side");
        assert_eq!(error.reason_code(), "board_states_broken");
    }

    #[test]
    fn styled_interior_breaks_states() {
        let mut world = world_with_board();
        world.set_block(
            ORIGIN.offset(3, 0, 3),
            BlockKind::Breadboard(BreadboardKind::InputNorth),
        );
        let error = Board::resolve(&world, ORIGIN).expect_err("styled interior");
        assert_eq!(error.reason_code(), "board_states_broken");

        let mut world = world_with_board();
        world.set_block(ORIGIN, BlockKind::Breadboard(BreadboardKind::InputNorth));
        let error = Board::resolve(&world, ORIGIN).expect_err("styled corner");
        assert_eq!(error.reason_code(), "board_states_broken");
    }

    #[test]
    fn set_side_state_restyles_blocks() {
        let mut world = world_with_board();
        let mut board = Board::resolve(&world, ORIGIN).expect("valid board");
        board.set_side_state(&mut world, Facing::South, SocketState::Output);
        assert_eq!(board.socket(Facing::South).state(), SocketState::Output);
        assert_eq!(
            world.block(ORIGIN.offset(2, 0, 7)),
            BlockKind::Breadboard(BreadboardKind::OutputSouth)
        );

        let reloaded = Board::resolve(&world, ORIGIN).expect("still valid");
        assert_eq!(reloaded, board);

        board.set_side_state(&mut world, Facing::East, SocketState::Empty);
        assert_eq!(
            world.block(ORIGIN.offset(7, 0, 1)),
            BlockKind::Breadboard(BreadboardKind::Normal)
        );
        assert_eq!(board.inputs().count(), 1);
    }
}
