use crate::support::{load_layout_or_exit, print_json, print_table_block, table_json};
use breadboard_board::{SynthesisError, synthesize};
use serde_json::json;
use std::path::PathBuf;
use tracing::{debug, info};

pub fn run(layout_path: String, json_output: bool) {
    let path = PathBuf::from(&layout_path);
    let layout = load_layout_or_exit(&path);
    let world = layout.to_world().unwrap_or_else(|e| {
        eprintln!("error: invalid layout {}: {e}", path.display());
        std::process::exit(1);
    });
    debug!(layout = %path.display(), origin = %layout.origin, "layout loaded");

    let table = match synthesize(&world, layout.origin) {
        Ok(table) => {
            info!(signature = %table.signature(), "board synthesized");
            Some(table)
        }
        Err(SynthesisError::Cyclic) => {
            info!(origin = %layout.origin, "board is cyclic");
            None
        }
        Err(e) => {
            eprintln!("error: {e} [{}]", e.message_key());
            std::process::exit(1);
        }
    };

    if json_output {
        let payload = match &table {
            Some(table) => {
                let mut payload = table_json(table);
                payload["layout"] = json!(path.display().to_string());
                payload["origin"] = json!(layout.origin);
                payload["cyclic"] = json!(false);
                payload
            }
            None => json!({
                "layout": path.display().to_string(),
                "origin": layout.origin,
                "cyclic": true,
                "message_key": SynthesisError::Cyclic.message_key(),
            }),
        };
        print_json(&payload);
    } else {
        println!("breadboard synth {}", path.display());
        println!("  Board: {}", layout.origin);
        match &table {
            Some(table) => {
                println!("  Cyclic: no");
                print_table_block(table);
            }
            None => println!("  Cyclic: yes"),
        }
    }
}
