use breadboard_board::Layout;
use breadboard_logic::{RelativeDirection, TruthTable};
use serde_json::{Value, json};
use std::path::Path;

pub fn load_layout_or_exit(path: &Path) -> Layout {
    Layout::load(path).unwrap_or_else(|e| {
        eprintln!("error: failed to load layout {}: {e}", path.display());
        std::process::exit(1);
    })
}

pub fn read_table_or_exit(path: &Path) -> TruthTable {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("error: failed to read {}: {e}", path.display());
        std::process::exit(1);
    });
    serde_json::from_str(&source).unwrap_or_else(|e| {
        eprintln!("error: invalid truth table in {}: {e}", path.display());
        std::process::exit(1);
    })
}

pub fn print_json(payload: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(payload).expect("json serialization")
    );
}

pub fn side_names(sides: &[RelativeDirection]) -> String {
    if sides.is_empty() {
        return "-".to_string();
    }
    sides
        .iter()
        .map(|side| side.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One line per input assignment: input bits, then output bits, both in
/// table side order.
pub fn table_rows(table: &TruthTable) -> Vec<String> {
    (0..table.row_count())
        .map(|input_set| {
            let inputs = bits((0..table.inputs().len()).map(|j| input_set & (1 << j) != 0));
            let outputs = bits(table.outputs_for_input_set(input_set));
            format!("{inputs} -> {outputs}")
        })
        .collect()
}

fn bits(values: impl IntoIterator<Item = bool>) -> String {
    let rendered: Vec<&str> = values
        .into_iter()
        .map(|on| if on { "1" } else { "0" })
        .collect();
    if rendered.is_empty() {
        "-".to_string()
    } else {
        rendered.join(" ")
    }
}

/// Description shared by `synth` and `inspect` JSON output.
pub fn table_json(table: &TruthTable) -> Value {
    let known = table.recognize();
    let cost = table.cost();
    json!({
        "signature": table.signature(),
        "known": known.map(|entry| entry.id()),
        "message_key": known.map(|entry| entry.message_key()),
        "texture": table.texture(),
        "cost": {
            "terracotta": cost.terracotta,
            "dust": cost.dust,
            "torches": cost.torches,
        },
        "table": serde_json::to_value(table).expect("json serialization"),
    })
}

pub fn print_table_block(table: &TruthTable) {
    println!("  Signature: {}", table.signature());
    match table.recognize() {
        Some(entry) => println!("  Recognized: {} ({})", entry.id(), entry.texture()),
        None => println!("  Recognized: no"),
    }
    println!("  Inputs: {}", side_names(table.inputs()));
    println!("  Outputs: {}", side_names(table.outputs()));
    println!("  Rows:");
    for row in table_rows(table) {
        println!("    {row}");
    }
}
