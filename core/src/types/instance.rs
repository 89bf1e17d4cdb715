use serde::{Deserialize, Serialize};

use super::account::Account;

/// Server profile returned by `GET /api/v2/instance`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Instance {
    pub domain: String,
    pub title: String,
    pub version: String,
    pub source_url: String,
    pub description: String,
    pub usage: Usage,
    pub thumbnail: Thumbnail,
    pub languages: Vec<String>,
    pub configuration: Configuration,
    pub registrations: Registrations,
    pub contact: Contact,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub users: UsageUsers,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageUsers {
    /// Users active in the past four weeks.
    pub active_month: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thumbnail {
    pub url: String,
    pub blurhash: Option<String>,
    pub versions: ThumbnailVersions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailVersions {
    #[serde(rename = "@1x")]
    pub one_x: Option<String>,
    #[serde(rename = "@2x")]
    pub two_x: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub urls: UrlsConfig,
    pub accounts: AccountsConfig,
    pub statuses: StatusesConfig,
    pub media_attachments: MediaAttachmentsConfig,
    pub polls: PollsConfig,
    pub translation: TranslationConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlsConfig {
    /// WebSocket URL for the streaming API.
    pub streaming: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountsConfig {
    pub max_featured_tags: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusesConfig {
    pub max_characters: u32,
    pub max_media_attachments: u32,
    pub characters_reserved_per_url: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaAttachmentsConfig {
    pub supported_mime_types: Vec<String>,
    pub image_size_limit: u64,
    pub image_matrix_limit: u64,
    pub video_size_limit: u64,
    pub video_frame_rate_limit: u32,
    pub video_matrix_limit: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollsConfig {
    pub max_options: u32,
    pub max_characters_per_option: u32,
    /// Seconds.
    pub min_expiration: u64,
    /// Seconds.
    pub max_expiration: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Registrations {
    pub enabled: bool,
    pub approval_required: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    /// `null` when the admins have not picked a contact account.
    pub account: Option<Account>,
}

/// A rule users of the server are expected to follow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rule {
    pub id: String,
    pub text: String,
}

/// One week of activity. The server sends every figure as a string and
/// they are kept that way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityWeek {
    /// Unix timestamp of the start of the week.
    pub week: String,
    pub statuses: String,
    pub logins: String,
    pub registrations: String,
}

/// A domain the server has moderated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainBlock {
    pub domain: String,
    /// SHA-256 hex digest of the domain.
    pub digest: String,
    /// `silence` or `suspend`.
    pub severity: String,
    pub comment: Option<String>,
}

/// Response of `GET /api/v1/instance/peers`.
pub type InstancePeers = Vec<String>;

/// Response of `GET /api/v1/instance/activity`, newest week first.
pub type InstanceActivity = Vec<ActivityWeek>;

/// Response of `GET /api/v1/instance/rules`.
pub type InstanceRules = Vec<Rule>;

/// Response of `GET /api/v1/instance/domain_block`.
pub type DomainsBlocked = Vec<DomainBlock>;
