//! Date command implementation.

use crate::output;
use bibrec_canonical::{format_date, parse_date, DateValue};

pub fn parse(text: String) -> Result<(), Box<dyn std::error::Error>> {
    let value = parse_date(&text);
    println!("{}", output::format_json(&value));
    Ok(())
}

pub fn format(value: String) -> Result<(), Box<dyn std::error::Error>> {
    let value: DateValue =
        serde_json::from_str(&value).map_err(|e| format!("Invalid date value: {}", e))?;
    println!("{}", format_date(&value));
    Ok(())
}
