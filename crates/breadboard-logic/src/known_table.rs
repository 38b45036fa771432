//! Catalog of recognizable gates.
//!
//! Each entry lists every signature the gate can present. A gate is known
//! by its behavior, not its orientation, so asymmetric gates (implication,
//! multiplexer, half subtractor) carry one signature per way of wiring
//! their inputs.

use crate::truth_table::TruthTable;

/// Texture used for circuits that match no catalog entry.
pub const DEFAULT_TEXTURE: &str = "blank";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownTable {
    id: &'static str,
    texture: &'static str,
    signatures: &'static [&'static str],
}

impl KnownTable {
    const fn new(
        id: &'static str,
        texture: &'static str,
        signatures: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            texture,
            signatures,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn texture(&self) -> &'static str {
        self.texture
    }

    pub fn signatures(&self) -> &'static [&'static str] {
        self.signatures
    }

    /// Localization key for the gate's display name.
    pub fn message_key(&self) -> String {
        format!("circuit.{}", self.id)
    }

    pub fn matches(&self, table: &TruthTable) -> bool {
        self.matches_signature(&table.signature())
    }

    pub fn matches_signature(&self, signature: &str) -> bool {
        self.signatures.contains(&signature)
    }

    /// Look an entry up by id.
    pub fn find(id: &str) -> Option<&'static KnownTable> {
        KNOWN_TABLES.iter().find(|known| known.id == id)
    }
}

/// All catalog entries, in recognition order.
pub fn known_tables() -> &'static [KnownTable] {
    KNOWN_TABLES
}

static KNOWN_TABLES: &[KnownTable] = &[
    KnownTable::new(
        "empty",
        DEFAULT_TEXTURE,
        &["0->0;", "1->0;", "2->0;", "3->0;", "4->0;"],
    ),
    KnownTable::new(
        "const_false",
        "false",
        &["0->1;{}", "0->2;{},{}", "0->3;{},{},{}", "0->4;{},{},{},{}"],
    ),
    KnownTable::new(
        "const_true",
        "true",
        &[
            "0->1;{0}",
            "0->2;{0},{0}",
            "0->3;{0},{0},{0}",
            "0->4;{0},{0},{0},{0}",
        ],
    ),
    KnownTable::new("or_1", "buffer", &["1->1;{1}"]),
    KnownTable::new("or_2", "or", &["2->1;{1, 2, 3}"]),
    KnownTable::new("or_3", "or", &["3->1;{1, 2, 3, 4, 5, 6, 7}"]),
    KnownTable::new("not", "not", &["1->1;{0}"]),
    KnownTable::new("nor_2", "nor", &["2->1;{0}"]),
    KnownTable::new("nor_3", "nor", &["3->1;{0}"]),
    KnownTable::new("and_2", "and", &["2->1;{3}"]),
    KnownTable::new("and_3", "and", &["3->1;{7}"]),
    KnownTable::new("nand_2", "nand", &["2->1;{0, 1, 2}"]),
    KnownTable::new("nand_3", "nand", &["3->1;{0, 1, 2, 3, 4, 5, 6}"]),
    KnownTable::new("xor", "xor", &["2->1;{1, 2}"]),
    KnownTable::new("xnor", "xnor", &["2->1;{0, 3}"]),
    KnownTable::new("impl", "impl", &["2->1;{0, 1, 3}", "2->1;{0, 2, 3}"]),
    KnownTable::new("not_impl", "not_impl", &["2->1;{1}", "2->1;{2}"]),
    KnownTable::new("half_adder", "half_adder", &["2->2;{1, 2},{3}"]),
    KnownTable::new(
        "mux_2_to_1",
        "mux",
        &[
            "3->1;{1, 3, 6, 7}",
            "3->1;{2, 3, 5, 7}",
            "3->1;{2, 5, 6, 7}",
            "3->1;{3, 4, 6, 7}",
            "3->1;{1, 5, 6, 7}",
            "3->1;{3, 4, 5, 7}",
        ],
    ),
    KnownTable::new(
        "aoi_2_1",
        "aoi",
        &["3->1;{0, 1, 2}", "3->1;{0, 1, 4}", "3->1;{0, 2, 4}"],
    ),
    KnownTable::new(
        "half_subtractor",
        "half_subtractor",
        &["2->2;{1},{1, 2}", "2->2;{2},{1, 2}"],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::RelativeDirection::{Back, Front, Left, Right};

    #[test]
    fn ids_are_unique() {
        let tables = known_tables();
        for (position, known) in tables.iter().enumerate() {
            assert!(
                tables[..position].iter().all(|other| other.id != known.id),
                "duplicate id {}",
                known.id
            );
        }
    }

    #[test]
    fn signatures_are_unique_across_entries() {
        let tables = known_tables();
        for (position, known) in tables.iter().enumerate() {
            for signature in known.signatures() {
                assert!(
                    tables[position + 1..]
                        .iter()
                        .all(|other| !other.matches_signature(signature)),
                    "{signature} is claimed twice"
                );
            }
        }
    }

    #[test]
    fn find_by_id() {
        let xor = KnownTable::find("xor").expect("xor is cataloged");
        assert_eq!(xor.texture(), "xor");
        assert_eq!(xor.message_key(), "circuit.xor");
        assert!(KnownTable::find("flip_flop").is_none());
    }

    #[test]
    fn every_mux_wiring_is_recognized() {
        // Select on each of the three inputs, with both data orderings.
        for select in 0..3 {
            for swapped in [false, true] {
                let data: Vec<usize> = (0..3).filter(|&bit| bit != select).collect();
                let (a, b) = if swapped {
                    (data[1], data[0])
                } else {
                    (data[0], data[1])
                };
                let table = TruthTable::from_single_fn(&[Right, Back, Left], Front, |l| {
                    if l[select] { l[b] } else { l[a] }
                })
                .expect("mux table");
                assert_eq!(
                    table.recognize().map(KnownTable::id),
                    Some("mux_2_to_1"),
                    "select={select} swapped={swapped} signature={}",
                    table.signature()
                );
            }
        }
    }

    #[test]
    fn implication_both_ways() {
        let forward =
            TruthTable::from_single_fn(&[Left, Right], Front, |l| !l[0] || l[1]).expect("impl");
        let backward =
            TruthTable::from_single_fn(&[Left, Right], Front, |l| !l[1] || l[0]).expect("impl");
        assert!(KnownTable::find("impl").expect("impl").matches(&forward));
        assert!(KnownTable::find("impl").expect("impl").matches(&backward));
        assert_eq!(forward.texture(), "impl");
    }
}
