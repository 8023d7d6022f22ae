//! Fields command implementation.

use crate::output;
use bibrec_schemas::Registry;
use serde_json::json;

pub fn run(item_type: String, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let registry = Registry::global();
    let def = registry.lookup(&item_type)?;

    if json_output {
        let rendered = json!({
            "itemType": def.item_type,
            "fields": def.fields,
            "creatorTypes": def.creator_types,
            "primaryCreatorType": registry.primary_creator_type(def.item_type),
        });
        println!("{}", output::format_json(&rendered));
        return Ok(());
    }

    output::print_table_header("FIELD", "KIND / BASE FIELD", 24);
    for field in def.fields {
        let kind = format!("{:?}", field.value_kind).to_lowercase();
        match field.base_field {
            Some(base) => println!("{:<24} {} -> {}", field.field, kind, base),
            None => println!("{:<24} {}", field.field, kind),
        }
    }
    println!();
    output::print_table_header("CREATOR TYPE", "", 24);
    for role in def.creator_types {
        let marker = if role.primary { "primary" } else { "" };
        println!("{:<24} {}", role.creator_type, marker);
    }
    Ok(())
}
