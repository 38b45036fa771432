//! Block positions and the six axis directions.

use breadboard_logic::Facing;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis direction. `ALL` follows the order neighbors are scanned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Horizontal directions, clockwise from north.
    pub const HORIZONTAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// The horizontal facing of this direction, if it has one.
    pub fn as_facing(self) -> Option<Facing> {
        match self {
            Direction::North => Some(Facing::North),
            Direction::East => Some(Facing::East),
            Direction::South => Some(Facing::South),
            Direction::West => Some(Facing::West),
            Direction::Down | Direction::Up => None,
        }
    }

    fn step(self) -> (i32, i32, i32) {
        match self {
            Direction::Down => (0, -1, 0),
            Direction::Up => (0, 1, 0),
            Direction::North => (0, 0, -1),
            Direction::South => (0, 0, 1),
            Direction::West => (-1, 0, 0),
            Direction::East => (1, 0, 0),
        }
    }
}

impl From<Facing> for Direction {
    fn from(facing: Facing) -> Self {
        match facing {
            Facing::North => Direction::North,
            Facing::East => Direction::East,
            Facing::South => Direction::South,
            Facing::West => Direction::West,
        }
    }
}

/// Integer block coordinates: `x` grows east, `y` up, `z` south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[i32; 3]", into = "[i32; 3]")]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    pub fn relative(self, direction: Direction) -> Self {
        let (dx, dy, dz) = direction.step();
        self.offset(dx, dy, dz)
    }

    pub fn above(self) -> Self {
        self.relative(Direction::Up)
    }

    pub fn below(self) -> Self {
        self.relative(Direction::Down)
    }

    pub fn north(self) -> Self {
        self.relative(Direction::North)
    }

    pub fn west(self) -> Self {
        self.relative(Direction::West)
    }
}

impl From<[i32; 3]> for BlockPos {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<BlockPos> for [i32; 3] {
    fn from(pos: BlockPos) -> Self {
        [pos.x, pos.y, pos.z]
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_steps() {
        let origin = BlockPos::new(3, 5, 7);
        assert_eq!(origin.above(), BlockPos::new(3, 6, 7));
        assert_eq!(origin.below(), BlockPos::new(3, 4, 7));
        assert_eq!(origin.north(), BlockPos::new(3, 5, 6));
        assert_eq!(origin.west(), BlockPos::new(2, 5, 7));
        assert_eq!(origin.relative(Direction::East), BlockPos::new(4, 5, 7));
        assert_eq!(origin.relative(Direction::South), BlockPos::new(3, 5, 8));
        for direction in Direction::ALL {
            assert_eq!(
                origin.relative(direction).relative(direction.opposite()),
                origin
            );
        }
    }

    #[test]
    fn facings_map_to_horizontal_directions() {
        for facing in Facing::ALL {
            assert_eq!(Direction::from(facing).as_facing(), Some(facing));
        }
        assert_eq!(
            Direction::HORIZONTAL.map(Direction::as_facing),
            Facing::ALL.map(Some)
        );
        assert_eq!(Direction::Up.as_facing(), None);
    }
}
