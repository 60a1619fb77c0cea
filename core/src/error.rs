//! Error types for the todo API client.
//!
//! # Design
//! The only failure the server reports on purpose is a 400 with an
//! `{"error": ...}` body, so it gets its own variant carrying the server's
//! message. Any other unexpected status lands in `HttpError` with the raw
//! status and body.

use std::fmt;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server rejected the request body (400).
    BadRequest(String),

    /// The server returned a status the operation does not expect.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "bad request: {msg}"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
