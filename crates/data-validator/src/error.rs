//! Validation Error Types

use thiserror::Error;

/// Errors during input validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Configured range cannot hold values of the vehicle state
    #[error("Invalid bounds for {field}: [{min}, {max}]")]
    InvalidBounds {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// Tyre pressure list does not cover all four wheels
    #[error("Expected 4 tyre pressures, got {0}")]
    WrongTyreCount(usize),
}
