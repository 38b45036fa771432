use crate::support::print_json;
use breadboard_logic::known_tables;
use serde_json::json;

pub fn run(json_output: bool) {
    if json_output {
        let entries: Vec<_> = known_tables()
            .iter()
            .map(|entry| {
                json!({
                    "id": entry.id(),
                    "texture": entry.texture(),
                    "message_key": entry.message_key(),
                    "signatures": entry.signatures(),
                })
            })
            .collect();
        print_json(&json!({ "count": entries.len(), "circuits": entries }));
    } else {
        println!("breadboard known ({} circuits)", known_tables().len());
        for entry in known_tables() {
            println!(
                "  {:<16} {:<16} {}",
                entry.id(),
                entry.texture(),
                entry.signatures().join(" | ")
            );
        }
    }
}
