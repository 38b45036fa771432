//! Boolean state of each relative side.
//!
//! Used for the input and output states of a circuit. The map is total:
//! every side always has a value, and sides nobody mentions are `false`.

use crate::direction::RelativeDirection;
use std::fmt;

/// Total map from [`RelativeDirection`] to `bool`, packed into four bits.
///
/// Bit `i` holds the value of the `i`-th side in declaration order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SideMap {
    bits: u8,
}

impl SideMap {
    /// Map with every side `false`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a map by evaluating `predicate` for every side.
    pub fn from_fn(mut predicate: impl FnMut(RelativeDirection) -> bool) -> Self {
        let mut map = Self::empty();
        for side in RelativeDirection::ALL {
            map = map.with(side, predicate(side));
        }
        map
    }

    /// Build a map from arbitrary items, each mapped to one `(side, state)`
    /// entry. Sides no item maps to stay `false`; later entries win.
    pub fn from_items<T>(
        items: impl IntoIterator<Item = T>,
        entry: impl FnMut(T) -> (RelativeDirection, bool),
    ) -> Self {
        items.into_iter().map(entry).collect()
    }

    /// Decode the compact form produced by [`SideMap::to_byte`].
    pub fn from_byte(encoded: u8) -> Self {
        Self {
            bits: encoded & 0b1111,
        }
    }

    pub fn to_byte(self) -> u8 {
        self.bits
    }

    pub fn get(self, side: RelativeDirection) -> bool {
        self.bits & Self::mask(side) != 0
    }

    /// Copy of this map with `side` set to `value`.
    pub fn with(self, side: RelativeDirection, value: bool) -> Self {
        let bits = if value {
            self.bits | Self::mask(side)
        } else {
            self.bits & !Self::mask(side)
        };
        Self { bits }
    }

    /// Whether any side is `true`.
    pub fn is_non_empty(self) -> bool {
        self.bits != 0
    }

    fn mask(side: RelativeDirection) -> u8 {
        1 << side.index()
    }
}

impl FromIterator<(RelativeDirection, bool)> for SideMap {
    fn from_iter<I: IntoIterator<Item = (RelativeDirection, bool)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |map, (side, value)| map.with(side, value))
    }
}

impl fmt::Debug for SideMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(RelativeDirection::ALL.map(|side| (side, self.get(side))))
            .finish()
    }
}
