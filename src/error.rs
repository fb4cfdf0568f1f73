//! Error types for input validation and CSV export

use thiserror::Error;

/// Rejected add-appliance input. Shown to the user, never fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("power_watts × hours_per_day is too large to estimate")]
    OutOfRange,
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer flush failed: {0}")]
    Flush(String),
}
