use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::emoji::CustomEmoji;

/// A user account, as embedded in an instance profile's contact section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub acct: String,
    pub display_name: String,
    pub locked: bool,
    pub bot: bool,
    pub discoverable: Option<bool>,
    pub group: bool,
    pub created_at: DateTime<Utc>,
    pub note: String,
    pub url: String,
    pub avatar: String,
    pub avatar_static: String,
    pub header: String,
    pub header_static: String,
    pub followers_count: u64,
    pub following_count: u64,
    pub statuses_count: u64,
    /// Date only (`YYYY-MM-DD`), not a timestamp.
    pub last_status_at: Option<String>,
    pub noindex: Option<bool>,
    pub emojis: Vec<CustomEmoji>,
    pub fields: Vec<Field>,
}

/// A profile metadata row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub verified_at: Option<DateTime<Utc>>,
}
