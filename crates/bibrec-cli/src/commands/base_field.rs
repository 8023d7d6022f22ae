//! Base-field command implementation.

use crate::output;
use bibrec_schemas::Registry;

pub fn run(base_field: String, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let refs = Registry::global().fields_for_base_field(&base_field)?;

    if json_output {
        println!("{}", output::format_json(&refs));
        return Ok(());
    }

    output::print_table_header("ITEM TYPE", "FIELD", 24);
    for field_ref in refs {
        println!("{:<24} {}", field_ref.item_type.as_str(), field_ref.field);
    }
    Ok(())
}
