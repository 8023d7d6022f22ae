//! CLI error type.

use bibrec_core::FatalError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Input was not JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A single record failed fatally.
    #[error(transparent)]
    Fatal(#[from] FatalError),
    /// Some records in a batch failed fatally.
    #[error("{failed} of {total} records could not be validated")]
    BatchFailed { failed: usize, total: usize },
}
