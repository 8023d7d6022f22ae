//! Reading JSON input from a file or stdin.

use crate::error::CliError;
use serde_json::Value;
use std::io::{self, Read};

/// Reads and decodes JSON from `path`, or from stdin when `path` is `None`.
pub fn read_json(path: Option<&str>) -> Result<Value, CliError> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_string(),
            source,
        })?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| CliError::Read {
                    path: "stdin".to_string(),
                    source,
                })?;
            buffer
        }
    };
    Ok(serde_json::from_str(&text)?)
}
