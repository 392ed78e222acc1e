//! Domain error types.

use thiserror::Error;

/// Errors raised while turning user input into alerts.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A status label outside {Urgent, Active, Watching, Resolved}.
    #[error("Unknown alert status: {0}")]
    UnknownStatus(String),

    /// A numeric form field that could not be coerced.
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
