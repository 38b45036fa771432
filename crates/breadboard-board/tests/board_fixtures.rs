//! Integration tests: synthesize the boards under tests/fixtures/.
//!
//! Each fixture directory has:
//! - layout.toml: the board and the components on top of it
//! - expect.json: the expected synthesis outcome
//!
//! A successful synthesis is reported with its signature, the recognized
//! catalog entry, and the full table; a failure with its message key.

use breadboard_board::{Layout, SynthesisError, synthesize};
use breadboard_logic::KnownTable;
use serde_json::{Value, json};
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn outcome(name: &str) -> Value {
    let layout_path = fixtures_dir().join(name).join("layout.toml");
    let layout = Layout::load(&layout_path)
        .unwrap_or_else(|e| panic!("failed to load {}: {e}", layout_path.display()));
    let world = layout
        .to_world()
        .unwrap_or_else(|e| panic!("failed to build {}: {e}", layout_path.display()));

    match synthesize(&world, layout.origin) {
        Ok(table) => json!({
            "outcome": "table",
            "signature": table.signature(),
            "known": table.recognize().map(KnownTable::id),
            "texture": table.texture(),
            "table": serde_json::to_value(&table).expect("failed to serialize table"),
        }),
        Err(error) => json!({
            "outcome": match error {
                SynthesisError::Cyclic => "cyclic",
                _ => "error",
            },
            "message_key": error.message_key(),
        }),
    }
}

fn run_fixture(name: &str) {
    let expect_path = fixtures_dir().join(name).join("expect.json");
    let expect_str = std::fs::read_to_string(&expect_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", expect_path.display()));
    let expected: Value = serde_json::from_str(&expect_str)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", expect_path.display()));

    let got = outcome(name);
    assert_eq!(
        got,
        expected,
        "\n\nFixture: {name}\n\nGot:\n{}\n\nExpected:\n{}\n",
        serde_json::to_string_pretty(&got).expect("pretty"),
        serde_json::to_string_pretty(&expected).expect("pretty"),
    );
}

#[test]
fn inverter() {
    run_fixture("inverter");
}

#[test]
fn buffer() {
    run_fixture("buffer");
}

#[test]
fn nor_gate() {
    run_fixture("nor_gate");
}

#[test]
fn nor_gate_rotated() {
    run_fixture("nor_gate_rotated");
}

#[test]
fn nested_and() {
    run_fixture("nested_and");
}

#[test]
fn torch_feedback() {
    run_fixture("torch_feedback");
}

#[test]
fn wire_too_long() {
    run_fixture("wire_too_long");
}

#[test]
fn rotation_keeps_signature() {
    assert_eq!(
        outcome("nor_gate")["signature"],
        outcome("nor_gate_rotated")["signature"]
    );
}

#[test]
fn resolving_from_any_board_block() {
    let layout_path = fixtures_dir().join("nested_and/layout.toml");
    let layout = Layout::load(&layout_path).expect("load");
    let world = layout.to_world().expect("world");

    let from_corner = synthesize(&world, layout.origin).expect("corner");
    let from_far_corner = synthesize(&world, layout.origin.offset(7, 0, 7)).expect("far corner");
    assert_eq!(from_corner, from_far_corner);

    let above = synthesize(&world, layout.origin.above());
    assert_eq!(
        above.map_err(|e| e.message_key()),
        Err("board.error.target_isnt_breadboard".to_string())
    );
}
