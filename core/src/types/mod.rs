//! Resource DTOs for the public Mastodon endpoints.
//!
//! # Design
//! Each type mirrors one JSON payload and nothing more. Every struct is
//! `#[serde(default)]`, so fields a server leaves out decode to their zero
//! value and fields it adds are ignored. Fields servers are known to send as
//! `null` are `Option`. A recognised field with the wrong JSON type is still
//! a decode error.
//!
//! The v2 instance profile (`Instance`) and the v1 profile (`LegacyInstance`)
//! are deliberately separate types; they share leaf structs but not a shape.

pub mod account;
pub mod emoji;
pub mod instance;
pub mod legacy;
pub mod trends;

pub use account::{Account, Field};
pub use emoji::{CustomEmoji, Emojis};
pub use instance::{
    AccountsConfig, ActivityWeek, Configuration, Contact, DomainBlock, DomainsBlocked, Instance,
    InstanceActivity, InstancePeers, InstanceRules, MediaAttachmentsConfig, PollsConfig,
    Registrations, Rule, StatusesConfig, Thumbnail, ThumbnailVersions, TranslationConfig,
    UrlsConfig, Usage, UsageUsers,
};
pub use legacy::{LegacyConfiguration, LegacyInstance, LegacyUrls, PollLimits, Stats};
pub use trends::{History, TrendLink, TrendLinks, TrendTag, TrendTags};
