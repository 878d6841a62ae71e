//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these; the HTTP adapter maps them to status codes.

use thiserror::Error;

/// Message returned to callers for every validation failure.
pub const NO_INPUT_MESSAGE: &str = "No input provided";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Missing, malformed or empty question. Client fault.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Outbound completion call failed or returned an unexpected shape.
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl DomainError {
    /// True for errors caused by the caller's input.
    pub fn is_client_fault(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}
