use serde::{Deserialize, Serialize};

/// A custom emoji available on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomEmoji {
    pub shortcode: String,
    pub url: String,
    pub static_url: String,
    pub visible_in_picker: bool,
    pub category: Option<String>,
}

/// Response of `GET /api/v1/custom_emojis`.
pub type Emojis = Vec<CustomEmoji>;
