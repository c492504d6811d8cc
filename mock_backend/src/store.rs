use types::{Channel, ChannelSummary, Podcast};

/// Backend state. Channels and podcasts are kept in insertion order.
#[derive(Debug, Default)]
pub struct Store {
    pub host: String,
    next_channel: i64,
    next_podcast: i64,
    channels: Vec<Channel>,
    podcasts: Vec<Podcast>,
    /// Raw `Authorization` header of every `/api` request, in order.
    pub authorizations: Vec<Option<String>>,
    /// When set, requests without exactly this header get a 401.
    pub required_authorization: Option<String>,
}

impl Store {
    pub fn new(host: String) -> Self {
        Self {
            host,
            ..Self::default()
        }
    }

    /// Adds a channel with the backend's defaults: title
    /// `New channel {id}` and alias `{id}`.
    pub fn add_channel(&mut self) -> Channel {
        self.next_channel += 1;
        let id = self.next_channel;

        let channel = Channel {
            id,
            title: format!("New channel {id}"),
            alias: id.to_string(),
            ..Channel::default()
        };
        self.channels.push(channel.clone());

        channel
    }

    pub fn summaries(&self) -> Vec<ChannelSummary> {
        self.channels.iter().map(ChannelSummary::from).collect()
    }

    pub fn channel(&self, id: i64) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id == id)
    }

    pub fn channel_mut(&mut self, id: i64) -> Option<&mut Channel> {
        self.channels.iter_mut().find(|c| c.id == id)
    }

    pub fn alias_taken(&self, alias: &str, by_other_than: i64) -> bool {
        self.channels
            .iter()
            .any(|c| c.alias == alias && c.id != by_other_than)
    }

    /// Stores a channel as sent by the console. `host` is not persisted.
    pub fn put_channel(&mut self, channel: Channel) -> bool {
        match self.channel_mut(channel.id) {
            Some(stored) => {
                *stored = Channel {
                    host: String::new(),
                    ..channel
                };
                true
            }
            None => false,
        }
    }

    pub fn remove_channel(&mut self, id: i64) -> bool {
        let before = self.channels.len();
        self.channels.retain(|c| c.id != id);
        self.podcasts.retain(|p| p.channel_id != Some(id));
        before != self.channels.len()
    }

    /// Public URL of a stored cover filename.
    pub fn cover_url(&self, alias: &str, cover: &str) -> String {
        if cover.is_empty() {
            return String::new();
        }
        format!("{}/files/{alias}/cover/{cover}", self.host)
    }

    /// Channel as `GET /api/channel/{id}` reports it: host filled in, cover
    /// expanded to a URL.
    pub fn channel_view(&self, id: i64) -> Option<Channel> {
        self.channel(id).map(|c| Channel {
            host: self.host.clone(),
            cover: self.cover_url(&c.alias, &c.cover),
            ..c.clone()
        })
    }

    pub fn add_podcast(
        &mut self,
        channel_id: i64,
        filename: &str,
        length: u64,
    ) -> Podcast {
        self.next_podcast += 1;

        // title is the file name without its last extension
        let title = filename
            .rsplit_once('.')
            .map_or(filename, |(name, _)| name)
            .to_string();

        let podcast = Podcast {
            id: self.next_podcast,
            channel_id: Some(channel_id),
            filename: filename.to_string(),
            title,
            length,
            ..Podcast::default()
        };
        self.podcasts.push(podcast.clone());

        podcast
    }

    /// Podcasts of a channel, newest first.
    pub fn podcasts_of(&self, channel_id: i64) -> Vec<Podcast> {
        self.podcasts
            .iter()
            .rev()
            .filter(|p| p.channel_id == Some(channel_id))
            .cloned()
            .collect()
    }

    pub fn podcast(&self, id: i64) -> Option<&Podcast> {
        self.podcasts.iter().find(|p| p.id == id)
    }

    pub fn put_podcast(&mut self, podcast: Podcast) -> bool {
        match self.podcasts.iter_mut().find(|p| p.id == podcast.id) {
            Some(stored) => {
                *stored = Podcast {
                    channel_id: stored.channel_id,
                    ..podcast
                };
                true
            }
            None => false,
        }
    }

    pub fn remove_podcast(&mut self, id: i64) -> bool {
        let before = self.podcasts.len();
        self.podcasts.retain(|p| p.id != id);
        before != self.podcasts.len()
    }
}
