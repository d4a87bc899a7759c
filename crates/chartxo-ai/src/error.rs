//! AI client error types.

use thiserror::Error;

/// Errors from the analysis and chat clients.
#[derive(Debug, Error)]
pub enum AiError {
    /// HTTP transport error (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The service returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// The image payload was empty.
    #[error("image payload is empty")]
    EmptyImage,

    /// The model produced no text.
    #[error("AI returned an empty response")]
    EmptyResponse,

    /// Neither the strict nor the recovery parse found a JSON object.
    #[error("malformed AI response: {0}")]
    MalformedResponse(String),

    /// The JSON parsed but does not match the analysis contract.
    #[error("AI response does not match the analysis schema: {errors:?}")]
    InvalidShape { errors: Vec<String> },

    /// The analysis schema could not be built or compiled.
    #[error("schema error: {0}")]
    Schema(String),

    /// The caller cancelled the request before it completed.
    #[error("request cancelled")]
    Cancelled,
}
