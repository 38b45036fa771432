//! Board layout files.
//!
//! A layout describes one board and the components stacked on it, as TOML
//! or JSON:
//!
//! ```toml
//! origin = [0, 0, 0]
//! layers = [[
//!     "........",
//!     "...+....",
//!     "...*....",
//!     "...#....",
//!     "+++++...",
//!     "........",
//!     "........",
//!     "........",
//! ]]
//!
//! [sockets]
//! west = "input"
//! north = "output"
//! ```
//!
//! Each layer holds eight rows (north to south) of eight glyphs (west to
//! east); the first layer sits directly on the breadboard.
//!
//! | glyph | block |
//! |---|---|
//! | `.` | air |
//! | `+` | wire |
//! | `#` | solid block |
//! | `*` | standing torch |
//! | `^` `>` `v` `<` | wall torch facing north / east / south / west |
//! | `C` | circuit, defined by a `[[circuits]]` entry at the same cell |

use crate::block::BlockKind;
use crate::error::LayoutError;
use crate::grid::GridWorld;
use crate::pos::BlockPos;
use crate::world::WorldMut;
use breadboard_logic::{Facing, SocketState, TruthTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Rows per layer and glyphs per row.
const GRID: usize = 8;

/// Largest absolute coordinate a layout may reach.
pub const WORLD_LIMIT: i32 = 30_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// North-west corner of the breadboard.
    #[serde(default)]
    pub origin: BlockPos,
    /// Sides not listed are empty.
    #[serde(default)]
    pub sockets: BTreeMap<Facing, SocketState>,
    #[serde(default)]
    pub layers: Vec<Vec<String>>,
    #[serde(default)]
    pub circuits: Vec<CircuitPlacement>,
}

/// A nested circuit block at one cell of the glyph grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitPlacement {
    pub layer: usize,
    pub row: usize,
    pub column: usize,
    pub facing: Facing,
    pub table: TruthTable,
}

impl Layout {
    pub fn from_toml_str(source: &str) -> Result<Self, LayoutError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a layout file: TOML for `.toml`, JSON otherwise.
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let source = std::fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&source),
            _ => Self::from_json_str(&source),
        }
    }

    /// World position of a glyph cell.
    pub fn cell_pos(&self, layer: usize, row: usize, column: usize) -> BlockPos {
        self.origin
            .offset(column as i32, layer as i32 + 1, row as i32)
    }

    /// Build the world this layout describes.
    pub fn to_world(&self) -> Result<GridWorld, LayoutError> {
        self.check_origin()?;
        let mut world = GridWorld::new();
        let sockets: Vec<(Facing, SocketState)> = self
            .sockets
            .iter()
            .map(|(facing, state)| (*facing, *state))
            .collect();
        world.lay_board(self.origin, &sockets);

        let mut circuits: BTreeMap<(usize, usize, usize), &CircuitPlacement> = BTreeMap::new();
        for circuit in &self.circuits {
            let (layer, row, column) = (circuit.layer, circuit.row, circuit.column);
            if circuits.insert((layer, row, column), circuit).is_some() {
                return Err(LayoutError::DuplicateCircuit { layer, row, column });
            }
        }

        for (layer, rows) in self.layers.iter().enumerate() {
            if rows.len() != GRID {
                return Err(LayoutError::RowCount {
                    layer,
                    count: rows.len(),
                });
            }
            for (row, glyphs) in rows.iter().enumerate() {
                let width = glyphs.chars().count();
                if width != GRID {
                    return Err(LayoutError::RowWidth { layer, row, width });
                }
                for (column, glyph) in glyphs.chars().enumerate() {
                    let pos = self.cell_pos(layer, row, column);
                    let block = match glyph {
                        '.' => continue,
                        '+' => BlockKind::Wire,
                        '#' => BlockKind::Solid,
                        '*' => BlockKind::Torch,
                        '^' => BlockKind::WallTorch {
                            facing: Facing::North,
                        },
                        '>' => BlockKind::WallTorch {
                            facing: Facing::East,
                        },
                        'v' => BlockKind::WallTorch {
                            facing: Facing::South,
                        },
                        '<' => BlockKind::WallTorch {
                            facing: Facing::West,
                        },
                        'C' => {
                            let circuit = circuits.remove(&(layer, row, column)).ok_or(
                                LayoutError::MissingCircuit { layer, row, column },
                            )?;
                            world.place_circuit(pos, circuit.facing, circuit.table.clone());
                            continue;
                        }
                        glyph => {
                            return Err(LayoutError::UnknownGlyph {
                                layer,
                                row,
                                column,
                                glyph,
                            });
                        }
                    };
                    world.set_block(pos, block);
                }
            }
        }

        if let Some(&(layer, row, column)) = circuits.keys().next() {
            return Err(LayoutError::StrayCircuit { layer, row, column });
        }
        Ok(world)
    }

    /// The board and every layer above it must stay within [`WORLD_LIMIT`].
    fn check_origin(&self) -> Result<(), LayoutError> {
        let in_range = |coord: i32| (-WORLD_LIMIT..=WORLD_LIMIT).contains(&coord);
        let origin = self.origin;
        let top = i32::try_from(self.layers.len())
            .ok()
            .filter(|height| *height <= WORLD_LIMIT)
            .map(|height| origin.y + height + 1);
        let fits = in_range(origin.x)
            && in_range(origin.y)
            && in_range(origin.z)
            && top.is_some_and(in_range);
        if fits {
            Ok(())
        } else {
            Err(LayoutError::OriginOutOfRange { origin })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::World;
    use breadboard_logic::RelativeDirection;

    const EMPTY_ROW: &str = "........";

    fn single_layer(rows: [&str; 8]) -> Vec<Vec<String>> {
        vec![rows.iter().map(|row| row.to_string()).collect()]
    }

    fn layout(rows: [&str; 8]) -> Layout {
        Layout {
            origin: BlockPos::new(0, 0, 0),
            sockets: BTreeMap::new(),
            layers: single_layer(rows),
            circuits: Vec::new(),
        }
    }

    #[test]
    fn glyphs_become_blocks() {
        let world = layout([
            "+#*^>v<.",
            EMPTY_ROW,
            EMPTY_ROW,
            EMPTY_ROW,
            EMPTY_ROW,
            EMPTY_ROW,
            EMPTY_ROW,
            EMPTY_ROW,
        ])
        .to_world()
        .expect("valid layout");
        let kinds: Vec<BlockKind> = (0..8)
            .map(|x| world.block(BlockPos::new(x, 1, 0)))
            .collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Wire,
                BlockKind::Solid,
                BlockKind::Torch,
                BlockKind::WallTorch {
                    facing: Facing::North
                },
                BlockKind::WallTorch {
                    facing: Facing::East
                },
                BlockKind::WallTorch {
                    facing: Facing::South
                },
                BlockKind::WallTorch {
                    facing: Facing::West
                },
                BlockKind::Air,
            ]
        );
        assert!(world.block(BlockPos::new(3, 0, 3)).is_breadboard());
    }

    #[test]
    fn toml_layout_with_circuit() {
        let source = r#"
origin = [4, 10, -2]
layers = [[
    "........",
    "...C....",
    "........",
    "........",
    "........",
    "........",
    "........",
    "........",
]]

[sockets]
east = "input"
north = "output"

[[circuits]]
layer = 0
row = 1
column = 3
facing = "west"
table = { inputs = ["back"], outputs = ["front"], mappings = [[true, false]] }
"#;
        let layout = Layout::from_toml_str(source).expect("parse");
        assert_eq!(layout.sockets.get(&Facing::East), Some(&SocketState::Input));
        let world = layout.to_world().expect("world");
        let pos = BlockPos::new(7, 11, -1);
        assert_eq!(
            world.block(pos),
            BlockKind::Circuit {
                facing: Facing::West
            }
        );
        let table = world.circuit_table(pos).expect("table");
        assert_eq!(table.inputs(), &[RelativeDirection::Back]);
        assert_eq!(table.signature(), "1->1;{0}");
    }

    #[test]
    fn malformed_layouts() {
        let mut short = layout([EMPTY_ROW; 8]);
        short.layers[0].pop();
        assert!(matches!(
            short.to_world(),
            Err(LayoutError::RowCount { layer: 0, count: 7 })
        ));

        let mut wide = layout([EMPTY_ROW; 8]);
        wide.layers[0][2] = ".........".to_string();
        assert!(matches!(
            wide.to_world(),
            Err(LayoutError::RowWidth {
                layer: 0,
                row: 2,
                width: 9
            })
        ));

        let mut unknown = layout([EMPTY_ROW; 8]);
        unknown.layers[0][4] = "...x....".to_string();
        assert!(matches!(
            unknown.to_world(),
            Err(LayoutError::UnknownGlyph {
                glyph: 'x',
                row: 4,
                column: 3,
                ..
            })
        ));

        let mut missing = layout([EMPTY_ROW; 8]);
        missing.layers[0][0] = "C.......".to_string();
        assert!(matches!(
            missing.to_world(),
            Err(LayoutError::MissingCircuit {
                layer: 0,
                row: 0,
                column: 0
            })
        ));

        let mut stray = layout([EMPTY_ROW; 8]);
        stray.circuits.push(CircuitPlacement {
            layer: 0,
            row: 5,
            column: 5,
            facing: Facing::North,
            table: TruthTable::empty(),
        });
        assert!(matches!(
            stray.to_world(),
            Err(LayoutError::StrayCircuit {
                layer: 0,
                row: 5,
                column: 5
            })
        ));
    }

    #[test]
    fn duplicate_circuits_are_rejected() {
        let mut twice = layout([EMPTY_ROW; 8]);
        twice.layers[0][0] = "C.......".to_string();
        for mappings in [[true, false], [false, true]] {
            twice.circuits.push(CircuitPlacement {
                layer: 0,
                row: 0,
                column: 0,
                facing: Facing::North,
                table: TruthTable::from_single_fn(
                    &[RelativeDirection::Back],
                    RelativeDirection::Front,
                    move |args| mappings[usize::from(args[0])],
                )
                .expect("table"),
            });
        }
        assert!(matches!(
            twice.to_world(),
            Err(LayoutError::DuplicateCircuit {
                layer: 0,
                row: 0,
                column: 0
            })
        ));
    }

    #[test]
    fn origin_must_stay_in_range() {
        let far = Layout::from_json_str(r#"{"origin":[2147483647,0,0]}"#).expect("parse");
        assert!(matches!(
            far.to_world(),
            Err(LayoutError::OriginOutOfRange { origin }) if origin.x == i32::MAX
        ));

        let mut low = layout([EMPTY_ROW; 8]);
        low.origin = BlockPos::new(0, i32::MIN, 0);
        assert!(matches!(
            low.to_world(),
            Err(LayoutError::OriginOutOfRange { .. })
        ));

        let mut tall = layout([EMPTY_ROW; 8]);
        tall.origin = BlockPos::new(0, WORLD_LIMIT - 1, 0);
        assert!(matches!(
            tall.to_world(),
            Err(LayoutError::OriginOutOfRange { .. })
        ));

        let mut edge = layout([EMPTY_ROW; 8]);
        edge.origin = BlockPos::new(-WORLD_LIMIT, WORLD_LIMIT - 2, WORLD_LIMIT);
        assert!(edge.to_world().is_ok());
    }

    #[test]
    fn invalid_tables_are_rejected_on_parse() {
        let source = r#"{
            "circuits": [{
                "layer": 0, "row": 0, "column": 0, "facing": "north",
                "table": { "inputs": ["back", "back"], "outputs": [], "mappings": [] }
            }]
        }"#;
        assert!(matches!(
            Layout::from_json_str(source),
            Err(LayoutError::Json(_))
        ));
    }
}
