//! HTTP transport types and the transport seam.
//!
//! # Design
//! Requests and responses are described as plain owned data. The client
//! builds an `HttpRequest`, hands it to a `Transport`, and interprets the
//! `HttpResponse` it gets back. Transports never judge status codes: a 404 is
//! a perfectly good response at this layer, and deciding that it is a
//! failure is the client's job.
//!
//! `UreqTransport` is the default transport. Callers who already run their
//! own HTTP stack can implement `Transport` instead, or skip it entirely and
//! feed responses to `MastodonClient::parse_response`.

use std::fmt;
use std::io;
use std::time::Duration;

use crate::error::ApiError;

/// Upper bound on how much of a response body is read into memory.
/// Peer lists of large instances run to several megabytes.
pub const MAX_BODY_SIZE: u64 = 64 * 1024 * 1024;

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data. The body is left untouched.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// First value of header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Executes a single `HttpRequest`.
///
/// Implementations must return non-2xx responses as `Ok` and must be safe to
/// call from several threads at once.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by a pooled `ureq` agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Every request made through this transport, body read included, must
    /// finish within `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.agent.get(request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.call().map_err(|e| match e {
            ureq::Error::Timeout(_) => ApiError::Timeout,
            other => ApiError::Transport(other.to_string()),
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();

        let body = response
            .body_mut()
            .with_config()
            .limit(MAX_BODY_SIZE)
            .read_to_vec()
            .map_err(|e| match e {
                ureq::Error::Timeout(_) => ApiError::Timeout,
                ureq::Error::Io(io) => ApiError::Io(io),
                other => ApiError::Io(io::Error::other(other)),
            })?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
