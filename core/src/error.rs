//! Error types for the todo API client.
//!
//! # Design
//! The server answers with two expected failure statuses: 404 for an unknown
//! todo and 400 for a missing field. Each gets its own variant; 400 carries
//! the server's `message`. Any other unexpected status lands in `HttpError`
//! with the raw status code and body.

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404: the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 400 and rejected the request.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The server returned some other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
