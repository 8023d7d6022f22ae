//! Types command implementation.

use crate::output;
use bibrec_schemas::Registry;

pub fn run(json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let registry = Registry::global();

    if json_output {
        let tags: Vec<&str> = registry.item_types().map(|t| t.as_str()).collect();
        println!("{}", output::format_json(&tags));
        return Ok(());
    }

    output::print_table_header("ITEM TYPE", "PRIMARY CREATOR TYPE", 24);
    for item_type in registry.item_types() {
        let primary = if registry.creator_types(item_type).is_empty() {
            "-"
        } else {
            registry.primary_creator_type(item_type)
        };
        println!("{:<24} {}", item_type.as_str(), primary);
    }
    Ok(())
}
