use serde::{Deserialize, Serialize};

/// Daily usage of a trending link or tag. All figures are strings on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct History {
    /// Unix timestamp of midnight on the given day.
    pub day: String,
    pub accounts: String,
    pub uses: String,
}

/// A link preview card that is being shared more than others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendLink {
    pub url: String,
    pub title: String,
    pub description: String,
    /// `link`, `photo`, `video` or `rich`.
    #[serde(rename = "type")]
    pub kind: String,
    pub author_name: String,
    pub author_url: String,
    pub provider_name: String,
    pub provider_url: String,
    pub html: String,
    pub width: u32,
    pub height: u32,
    pub image: Option<String>,
    pub embed_url: String,
    pub blurhash: Option<String>,
    pub history: Vec<History>,
}

/// A hashtag being used more frequently within the past week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendTag {
    pub name: String,
    pub url: String,
    pub history: Vec<History>,
    /// Only meaningful for authenticated requests; false otherwise.
    pub following: bool,
}

/// Response of `GET /api/v1/trends/links`.
pub type TrendLinks = Vec<TrendLink>;

/// Response of `GET /api/v1/trends/tags`.
pub type TrendTags = Vec<TrendTag>;
