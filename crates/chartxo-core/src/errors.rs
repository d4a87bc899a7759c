//! Cross-cutting error types for Chartxo.
//!
//! Domain-specific errors (`AiError`, `StoreError`, `PaymentError`) live in
//! their respective crates. They converge into `anyhow` in `chartxo-cli`.

use thiserror::Error;

/// Errors that can be raised by any Chartxo crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {machine} from {from} to {to}")]
    InvalidTransition {
        machine: String,
        from: String,
        to: String,
    },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
