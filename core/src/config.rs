//! Client configuration.
//!
//! `ClientConfig` carries everything a client needs to know about its target
//! server. It is plain data; `validate` is run by every `MastodonClient`
//! constructor so a client never exists with an unusable server address.

use std::time::Duration;

use crate::error::ApiError;

/// User-Agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "mastodon-public-api";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    server: String,
    user_agent: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Configuration for `server` with the default user agent and timeout.
    pub fn new(server: &str) -> Self {
        Self {
            server: server.trim_end_matches('/').to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Reject server addresses without an explicit `http://` or `https://`
    /// scheme. The scheme check ignores ASCII case.
    pub fn validate(&self) -> Result<(), ApiError> {
        let has_scheme = ["https://", "http://"].iter().any(|scheme| {
            self.server
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        });
        let has_host = self
            .server
            .split_once("://")
            .is_some_and(|(_, rest)| !rest.is_empty());

        if has_scheme && has_host {
            Ok(())
        } else {
            Err(ApiError::InvalidServer(self.server.clone()))
        }
    }
}
