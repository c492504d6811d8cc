use crate::{Channel, ChannelSummary, UpdateChannelResponse};
use serde::{Deserialize, Deserializer};

impl From<&Channel> for ChannelSummary {
    fn from(channel: &Channel) -> Self {
        Self {
            id: channel.id,
            alias: channel.alias.clone(),
            title: channel.title.clone(),
        }
    }
}

impl Channel {
    /// Public feed URL of the channel, `{host}/feed/{alias}`.
    #[must_use]
    pub fn feed_url(&self) -> String {
        format!("{}/feed/{}", self.host, self.alias)
    }

    /// Last path segment of the cover URL, which is the name the backend
    /// stores the cover under.
    #[must_use]
    pub fn cover_filename(&self) -> &str {
        cover_filename(&self.cover)
    }
}

impl UpdateChannelResponse {
    /// The backend flags a rejected alias rename with a truthy `error`
    /// field. Anything else counts as success.
    #[must_use]
    pub fn is_alias_conflict(&self) -> bool {
        match &self.error {
            None
            | Some(
                serde_json::Value::Null | serde_json::Value::Bool(false),
            ) => false,
            Some(serde_json::Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }
}

/// Returns the part of `cover` after the last `/`.
///
/// # Example
///
/// ```rust
/// assert_eq!(
///     types::cover_filename("http://host/files/show/cover/art.png"),
///     "art.png"
/// );
/// ```
#[must_use]
pub fn cover_filename(cover: &str) -> &str {
    cover.rsplit('/').next().unwrap_or_default()
}

// Treats an explicit `null` like a missing field.
pub(crate) fn deserialize_null_default<'de, D, T>(
    deserializer: D,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Overview;
    use serde_json::json;

    #[test]
    fn test_feed_url() {
        let channel = Channel {
            alias: "my-show".to_string(),
            host: "http://127.0.0.1:3333".to_string(),
            ..Channel::default()
        };

        assert_eq!(channel.feed_url(), "http://127.0.0.1:3333/feed/my-show");
    }

    #[test]
    fn test_cover_filename() {
        assert_eq!(
            cover_filename("http://h/files/show/cover/art.png"),
            "art.png"
        );
        assert_eq!(cover_filename("art.png"), "art.png");
        assert_eq!(cover_filename(""), "");
    }

    #[test]
    fn test_overview_null_podcasts() {
        let overview: Overview = serde_json::from_value(json!({
            "info": { "id": 3, "alias": "three", "title": "Three", "cover": "", "host": "" },
            "podcasts": null
        }))
        .unwrap();

        assert_eq!(overview.info.id, 3);
        assert!(overview.podcasts.is_empty());
    }

    #[test]
    fn test_alias_conflict_marker() {
        let ok: UpdateChannelResponse =
            serde_json::from_value(json!({ "cover": "" })).unwrap();
        assert!(!ok.is_alias_conflict());

        let conflict: UpdateChannelResponse =
            serde_json::from_value(json!({ "cover": "", "error": true }))
                .unwrap();
        assert!(conflict.is_alias_conflict());

        let message: UpdateChannelResponse =
            serde_json::from_value(json!({ "error": "alias in use" })).unwrap();
        assert!(message.is_alias_conflict());
    }

    #[test]
    fn test_summary_from_channel() {
        let channel = Channel {
            id: 7,
            alias: "seven".to_string(),
            title: "Seven".to_string(),
            author: "someone".to_string(),
            ..Channel::default()
        };

        assert_eq!(
            ChannelSummary::from(&channel),
            ChannelSummary {
                id: 7,
                alias: "seven".to_string(),
                title: "Seven".to_string(),
            }
        );
    }
}
