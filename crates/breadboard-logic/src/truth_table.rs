//! Truth tables of combinational circuits.
//!
//! A table with `n` inputs and `m` outputs has `2^n` rows. The input
//! columns are implicit: row `i` is the assignment where input `j` is on
//! exactly when bit `j` of `i` is set. Only the `m` output columns are
//! stored, one [`BitColumn`] per output, so the whole table of a board-sized
//! circuit is a handful of 16-bit words.
//!
//! Inputs and outputs together never exceed the four sides of a board.

use crate::direction::RelativeDirection;
use crate::error::LogicError;
use crate::known_table::{DEFAULT_TEXTURE, KnownTable, known_tables};
use crate::side_map::SideMap;
use crate::socket::SocketState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of inputs plus outputs of a table.
pub const MAX_SIDES: usize = 4;

/// One output column: bit `i` is the output's value for input assignment `i`.
///
/// Ordering compares the columns as unsigned integers, i.e. by the highest
/// differing bit, so a column with a higher set bit is always greater.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BitColumn(u16);

impl BitColumn {
    /// Widest column a table can hold (`2^MAX_SIDES` rows).
    pub const MAX_ROWS: usize = 1 << MAX_SIDES;

    pub fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub fn from_rows(rows: &[bool]) -> Self {
        rows.iter()
            .take(Self::MAX_ROWS)
            .enumerate()
            .fold(Self::default(), |column, (row, &value)| {
                column.with(row, value)
            })
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn get(self, row: usize) -> bool {
        row < Self::MAX_ROWS && self.0 & (1 << row) != 0
    }

    /// Copy of this column with `row` set to `value`. Rows past
    /// [`BitColumn::MAX_ROWS`] are ignored.
    pub fn with(self, row: usize, value: bool) -> Self {
        if row >= Self::MAX_ROWS {
            return self;
        }
        if value {
            Self(self.0 | (1 << row))
        } else {
            Self(self.0 & !(1 << row))
        }
    }

    pub fn count_ones(self) -> u32 {
        self.0.count_ones()
    }

    /// Index of the highest set bit plus one (zero for an all-false column).
    pub fn bit_length(self) -> usize {
        (u16::BITS - self.0.leading_zeros()) as usize
    }

    pub fn to_rows(self, row_count: usize) -> Vec<bool> {
        (0..row_count).map(|row| self.get(row)).collect()
    }

    fn set_rows(self) -> impl Iterator<Item = usize> {
        (0..Self::MAX_ROWS).filter(move |&row| self.get(row))
    }
}

/// Renders the set rows, e.g. `{0, 1, 2}` or `{}`.
impl fmt::Display for BitColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (position, row) in self.set_rows().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{row}")?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for BitColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitColumn({self})")
    }
}

/// Material cost of a circuit block with a given table.
///
/// Every block costs one unit of casing; dust and torch counts follow the
/// zero and one bits of the table, so the cost grows with the table's
/// information content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitCost {
    pub terracotta: u32,
    pub dust: u32,
    pub torches: u32,
}

/// Canonical truth table of a combinational circuit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TruthTableRecord", into = "TruthTableRecord")]
pub struct TruthTable {
    inputs: Vec<RelativeDirection>,
    outputs: Vec<RelativeDirection>,
    mappings: Vec<BitColumn>,
}

impl TruthTable {
    /// Build a table, validating the side lists and the mapping widths.
    pub fn new(
        inputs: Vec<RelativeDirection>,
        outputs: Vec<RelativeDirection>,
        mappings: Vec<BitColumn>,
    ) -> Result<Self, LogicError> {
        validate_sides(&inputs, &outputs)?;
        if mappings.len() != outputs.len() {
            return Err(LogicError::MappingCountMismatch {
                expected: outputs.len(),
                actual: mappings.len(),
            });
        }
        let rows = 1usize << inputs.len();
        for (index, column) in mappings.iter().enumerate() {
            if column.bit_length() > rows {
                return Err(LogicError::MappingWidth {
                    index,
                    expected: rows,
                    actual: column.bit_length(),
                });
            }
        }
        Ok(Self {
            inputs,
            outputs,
            mappings,
        })
    }

    /// The table of a blank circuit: no inputs, no outputs.
    pub fn empty() -> Self {
        Self {
            inputs: Vec::new(),
            outputs: Vec::new(),
            mappings: Vec::new(),
        }
    }

    /// Tabulate one boolean function per output.
    ///
    /// Every function receives the input states in `inputs` order and is
    /// evaluated for all `2^n` assignments.
    pub fn from_bool_fn(
        inputs: &[RelativeDirection],
        outputs: &[RelativeDirection],
        funcs: &[&dyn Fn(&[bool]) -> bool],
    ) -> Result<Self, LogicError> {
        validate_sides(inputs, outputs)?;
        let rows = 1usize << inputs.len();
        let mut arguments = vec![false; inputs.len()];
        let mappings = funcs
            .iter()
            .map(|func| {
                (0..rows).fold(BitColumn::default(), |column, input_set| {
                    for (bit, argument) in arguments.iter_mut().enumerate() {
                        *argument = input_set & (1 << bit) != 0;
                    }
                    column.with(input_set, func(&arguments))
                })
            })
            .collect();
        Self::new(inputs.to_vec(), outputs.to_vec(), mappings)
    }

    /// Single-output shorthand for [`TruthTable::from_bool_fn`].
    pub fn from_single_fn(
        inputs: &[RelativeDirection],
        output: RelativeDirection,
        func: impl Fn(&[bool]) -> bool,
    ) -> Result<Self, LogicError> {
        let func: &dyn Fn(&[bool]) -> bool = &func;
        Self::from_bool_fn(inputs, &[output], &[func])
    }

    pub fn inputs(&self) -> &[RelativeDirection] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[RelativeDirection] {
        &self.outputs
    }

    pub fn mappings(&self) -> &[BitColumn] {
        &self.mappings
    }

    /// Number of input assignments, `2^n`.
    pub fn row_count(&self) -> usize {
        1 << self.inputs.len()
    }

    /// Assignment index of a side map: `Σ 2^j · state(inputs[j])`.
    pub fn input_set_for(&self, input_map: SideMap) -> usize {
        self.inputs
            .iter()
            .enumerate()
            .filter(|(_, side)| input_map.get(**side))
            .map(|(bit, _)| 1usize << bit)
            .sum()
    }

    /// Output values, in `outputs` order, for one assignment index.
    pub fn outputs_for_input_set(&self, input_set: usize) -> Vec<bool> {
        self.mappings
            .iter()
            .map(|column| column.get(input_set))
            .collect()
    }

    /// Map input side states to output side states. Sides that are not
    /// outputs of this table are `false`.
    pub fn outputs_for_inputs(&self, input_map: SideMap) -> SideMap {
        let input_set = self.input_set_for(input_map);
        SideMap::from_items(self.outputs.iter().zip(&self.mappings), |(side, column)| {
            (*side, column.get(input_set))
        })
    }

    pub fn has_input(&self, side: RelativeDirection) -> bool {
        self.inputs.contains(&side)
    }

    pub fn has_output(&self, side: RelativeDirection) -> bool {
        self.outputs.contains(&side)
    }

    pub fn has_input_or_output(&self, side: RelativeDirection) -> bool {
        self.has_input(side) || self.has_output(side)
    }

    pub fn state_for_side(&self, side: RelativeDirection) -> SocketState {
        if self.has_input(side) {
            SocketState::Input
        } else if self.has_output(side) {
            SocketState::Output
        } else {
            SocketState::Empty
        }
    }

    /// Orientation-independent identity of the table's behavior.
    ///
    /// Format: `"{n}->{m};"` followed by the output columns sorted by
    /// magnitude and joined with commas, e.g. `"2->1;{0, 1, 2}"` for NAND.
    pub fn signature(&self) -> String {
        let mut columns = self.mappings.clone();
        columns.sort();
        let rendered: Vec<String> = columns.iter().map(BitColumn::to_string).collect();
        format!(
            "{}->{};{}",
            self.inputs.len(),
            self.outputs.len(),
            rendered.join(",")
        )
    }

    /// First catalog entry whose signature set contains this table's.
    pub fn recognize(&self) -> Option<&'static KnownTable> {
        let signature = self.signature();
        known_tables()
            .iter()
            .find(|known| known.matches_signature(&signature))
    }

    /// Texture of the recognized gate, or [`DEFAULT_TEXTURE`].
    pub fn texture(&self) -> &'static str {
        self.recognize()
            .map(KnownTable::texture)
            .unwrap_or(DEFAULT_TEXTURE)
    }

    pub fn cost(&self) -> CircuitCost {
        let rows = self.row_count() as u32;
        let torches: u32 = self.mappings.iter().map(|column| column.count_ones()).sum();
        let dust = rows * self.mappings.len() as u32 - torches;
        CircuitCost {
            terracotta: 1,
            dust,
            torches,
        }
    }
}

impl Default for TruthTable {
    fn default() -> Self {
        Self::empty()
    }
}

fn validate_sides(
    inputs: &[RelativeDirection],
    outputs: &[RelativeDirection],
) -> Result<(), LogicError> {
    let count = inputs.len() + outputs.len();
    if count > MAX_SIDES {
        return Err(LogicError::TooManySides { count });
    }
    for (position, side) in inputs.iter().enumerate() {
        if inputs[..position].contains(side) {
            return Err(LogicError::DuplicateSide(*side));
        }
    }
    for (position, side) in outputs.iter().enumerate() {
        if outputs[..position].contains(side) {
            return Err(LogicError::DuplicateSide(*side));
        }
        if inputs.contains(side) {
            return Err(LogicError::OverlappingSide(*side));
        }
    }
    Ok(())
}

/// Persisted shape of a [`TruthTable`]: ordered input sides, ordered output
/// sides, and one row vector of length `2^n` per output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTableRecord {
    pub inputs: Vec<RelativeDirection>,
    pub outputs: Vec<RelativeDirection>,
    pub mappings: Vec<Vec<bool>>,
}

impl From<TruthTable> for TruthTableRecord {
    fn from(table: TruthTable) -> Self {
        let rows = table.row_count();
        Self {
            mappings: table
                .mappings
                .iter()
                .map(|column| column.to_rows(rows))
                .collect(),
            inputs: table.inputs,
            outputs: table.outputs,
        }
    }
}

impl TryFrom<TruthTableRecord> for TruthTable {
    type Error = LogicError;

    fn try_from(record: TruthTableRecord) -> Result<Self, Self::Error> {
        validate_sides(&record.inputs, &record.outputs)?;
        let rows = 1usize << record.inputs.len();
        for (index, column) in record.mappings.iter().enumerate() {
            if column.len() != rows {
                return Err(LogicError::MappingWidth {
                    index,
                    expected: rows,
                    actual: column.len(),
                });
            }
        }
        let mappings = record
            .mappings
            .iter()
            .map(|rows| BitColumn::from_rows(rows))
            .collect();
        TruthTable::new(record.inputs, record.outputs, mappings)
    }
}
