//! Template command implementation.

use crate::output;

pub fn run(item_type: String) -> Result<(), Box<dyn std::error::Error>> {
    let record = bibrec_core::template(&item_type)?;
    println!("{}", output::format_json(&record));
    Ok(())
}
