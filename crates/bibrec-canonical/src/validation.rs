use thiserror::Error;

/// Validation errors for canonical primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') does not match the expected pattern")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When a numeric component exceeds its bounds.
    #[error("{field} ({value}) is out of bounds")]
    OutOfBounds {
        /// Field name that is out of bounds.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When a sequence has the wrong number of elements.
    #[error("{field} has {len} elements; expected {expected}")]
    WrongArity {
        /// Field name with the wrong arity.
        field: &'static str,
        /// Actual element count.
        len: usize,
        /// Human-readable expected arity.
        expected: &'static str,
    },
}
