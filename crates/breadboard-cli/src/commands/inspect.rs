use crate::support::{print_json, print_table_block, read_table_or_exit, table_json};
use std::path::PathBuf;

pub fn run(table_path: String, json_output: bool) {
    let path = PathBuf::from(&table_path);
    let table = read_table_or_exit(&path);

    if json_output {
        let mut payload = table_json(&table);
        payload["path"] = path.display().to_string().into();
        print_json(&payload);
    } else {
        let cost = table.cost();
        println!("breadboard inspect {}", path.display());
        print_table_block(&table);
        println!("  Texture: {}", table.texture());
        println!(
            "  Cost: {} terracotta, {} dust, {} torches",
            cost.terracotta, cost.dust, cost.torches
        );
    }
}
