//! Typed, read-only client for the public REST endpoints of a Mastodon server.
//!
//! # Overview
//! Fetches server metadata (instance profile, custom emojis, peers, weekly
//! activity, domain blocks, rules) and trending links and tags, decoding each
//! JSON response into a typed value.
//!
//! # Design
//! - `MastodonClient` holds only its `ClientConfig` and a `Transport`.
//! - Every endpoint is the same pipeline: URL from server and fixed path, one
//!   GET with a User-Agent and a bounded timeout, a 200 check, a JSON decode.
//! - The pipeline steps are public, so callers with their own HTTP stack can
//!   build requests and parse responses without the bundled transport.
//! - No authentication, pagination, retries or caching.
//!
//! ```no_run
//! let client = mastodon_core::MastodonClient::new("https://mastodon.social")?;
//! for rule in client.instance_rules()? {
//!     println!("{}: {}", rule.id, rule.text);
//! }
//! # Ok::<(), mastodon_core::ApiError>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use client::MastodonClient;
pub use config::{ClientConfig, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse, Transport, UreqTransport};
pub use types::*;
