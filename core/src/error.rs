//! Error types for the enhancement API client.
//!
//! # Design
//! The source system models exactly one failure class — "the request failed
//! or the response was undecodable" — and recovers from none of it: no
//! retries, no timeouts, no fallback rendering. The variants below only
//! split that class by where it was detected (transport, status, decode,
//! encode) so callers get a useful message; every one of them propagates
//! unrecovered through the façade.

use std::fmt;

/// Errors returned by `EnhancementClient` and `MemorySystems` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The transport failed to complete the HTTP round trip.
    TransportError(String),

    /// The server returned a non-200 status.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::TransportError(msg) => {
                write!(f, "transport failed: {msg}")
            }
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
