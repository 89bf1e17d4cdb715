//! Error types for the Mastodon public API client.
//!
//! # Design
//! Every stage of the request pipeline has its own variant so callers can
//! tell a misconfigured client from an unreachable server, a slow server, a
//! refusing server, and a payload that does not match the expected shape.
//! Nothing in the pipeline recovers from an error; each one is returned to
//! the immediate caller as-is.

use thiserror::Error;

/// Errors returned by `MastodonClient` and its transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server address does not start with `http://` or `https://`.
    #[error("invalid server provided: {0}")]
    InvalidServer(String),

    /// DNS, connection or TLS failure before a response was received.
    #[error("transport error: {0}")]
    Transport(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The server answered with something other than 200.
    #[error("request failed with status {status}")]
    RequestFailed { status: u16, body: String },

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Io(#[from] std::io::Error),

    /// The response body is not JSON of the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
