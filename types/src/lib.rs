use serde::{Deserialize, Serialize};

mod utils;

pub use utils::*;

/// A podcast feed as the backend stores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: i64,

    #[serde(default)]
    pub alias: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Full cover URL when read from the backend, bare filename when sent
    /// back in an update.
    #[serde(default)]
    pub cover: String,

    #[serde(default)]
    pub author: String,

    /// Public base URL the backend serves feeds from.
    #[serde(default)]
    pub host: String,
}

/// Entry of `GET /api/list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSummary {
    pub id: i64,

    #[serde(default)]
    pub alias: String,

    #[serde(default)]
    pub title: String,
}

/// A single episode of a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Podcast {
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub channel_id: Option<i64>,

    #[serde(default)]
    pub filename: String,

    #[serde(default)]
    pub published: u8,

    #[serde(default)]
    pub title: String,

    /// Size of the uploaded audio file in bytes.
    #[serde(default)]
    pub length: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub guid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub pub_date: Option<String>,

    #[serde(default)]
    pub description: String,

    /// Total length in seconds.
    #[serde(default)]
    pub duration: u64,

    #[serde(default)]
    pub artwork: String,

    #[serde(default)]
    pub explicit: u8,

    #[serde(default)]
    pub season: u64,

    #[serde(default)]
    pub episode: u64,
}

/// Response of `GET /api/channel/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    pub info: Channel,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub podcasts: Vec<Podcast>,
}

/// Body of `PUT /api/channel/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateChannelRequest {
    pub channel: Channel,

    pub old_alias: String,
}

/// Response of `PUT /api/channel/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateChannelResponse {
    #[serde(default)]
    pub cover: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// Response of `POST /api/channel/{id}/cover/upload`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverResponse {
    #[serde(default)]
    pub cover: String,
}
