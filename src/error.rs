//! Error types for input validation and assumption loading

use std::path::PathBuf;

/// Rejected simulation input. No projection is run when this is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    #[error("age of death ({age_of_death}) must be greater than current age ({current_age})")]
    AgeOfDeathNotAfterCurrentAge { current_age: u32, age_of_death: u32 },

    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

/// Failure while reading assumption overrides from disk
#[derive(Debug, thiserror::Error)]
pub enum AssumptionsError {
    #[error("failed to read {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("unknown assumption parameter: {0}")]
    UnknownParameter(String),

    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: String, value: String },
}
