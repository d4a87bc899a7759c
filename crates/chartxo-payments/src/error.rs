//! Payment error types.
//!
//! The `Display` text of each variant is what the handler returns to the
//! caller in `{"error": ...}`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Server Config Error: Payment API keys are missing in server secrets.")]
    MissingCredentials,

    #[error("Invalid payment gateway.")]
    InvalidGateway(String),

    #[error("Invalid plan '{0}'.")]
    InvalidPlan(String),

    /// The request body is not a valid checkout request.
    #[error("Invalid request body: {0}")]
    BadRequest(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provider answered with a non-success status.
    #[error("{provider} error ({status}): {message}")]
    Provider {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("serialization error: {0}")]
    Encode(String),

    /// The edge server failed to bind or receive.
    #[error("server error: {0}")]
    Server(String),
}
