//! The v1 instance profile (`GET /api/v1/instance`).
//!
//! Mastodon 4.0 replaced this shape with the v2 `Instance`, but older servers
//! and many forks still only serve v1, so it is kept as its own type.

use serde::{Deserialize, Serialize};

use super::account::Account;
use super::instance::{AccountsConfig, MediaAttachmentsConfig, PollsConfig, Rule, StatusesConfig};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyInstance {
    /// Bare domain name, without a scheme.
    pub uri: String,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub email: String,
    pub version: String,
    pub urls: LegacyUrls,
    pub stats: Stats,
    pub thumbnail: Option<String>,
    pub max_toot_chars: u32,
    pub poll_limits: PollLimits,
    pub languages: Vec<String>,
    /// Whether sign-ups are open. A plain flag here, an object in v2.
    pub registrations: bool,
    pub approval_required: bool,
    pub invites_enabled: bool,
    pub configuration: LegacyConfiguration,
    pub contact_account: Option<Account>,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyUrls {
    pub streaming_api: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub user_count: u64,
    pub status_count: u64,
    pub domain_count: u64,
}

/// Superseded by `configuration.polls`, still sent by some servers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollLimits {
    pub max_options: u32,
    pub max_option_chars: u32,
    pub min_expiration: u64,
    pub max_expiration: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyConfiguration {
    pub accounts: AccountsConfig,
    pub statuses: StatusesConfig,
    pub media_attachments: MediaAttachmentsConfig,
    pub polls: PollsConfig,
}
