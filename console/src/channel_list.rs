use crate::ScreenError;
use fc_api::ApiClient;
use form_state::{Outcome, reconcile};
use types::ChannelSummary;

/// The sidebar: every channel plus the one being edited.
#[derive(Debug, Clone)]
pub struct ChannelList {
    api: ApiClient,
    channels: Vec<ChannelSummary>,
    selected: Option<i64>,
}

impl ChannelList {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self {
            api,
            channels: Vec::new(),
            selected: None,
        }
    }

    #[must_use]
    pub fn channels(&self) -> &[ChannelSummary] {
        &self.channels
    }

    #[must_use]
    pub const fn selected(&self) -> Option<i64> {
        self.selected
    }

    /// Replaces the list with the backend's.
    ///
    /// # Errors
    ///
    /// If the request fails. The current list is kept.
    pub async fn load(&mut self) -> Result<(), ScreenError> {
        self.channels = self.api.list_channels().await?;
        tracing::info!("loaded {} channels", self.channels.len());

        Ok(())
    }

    /// Creates a channel with the backend's defaults, puts it first and
    /// selects it. Returns its id.
    ///
    /// # Errors
    ///
    /// If the request fails. Nothing changes locally.
    pub async fn add_channel(&mut self) -> Result<i64, ScreenError> {
        let channel = self.api.create_channel().await?;

        self.channels = reconcile(
            &self.channels,
            Outcome::Created(ChannelSummary::from(&channel)),
        );
        self.selected = Some(channel.id);

        Ok(channel.id)
    }

    pub const fn select(&mut self, id: i64) {
        self.selected = Some(id);
    }

    /// Folds a mutation confirmed elsewhere, usually by the channel
    /// screen, into the list.
    pub fn apply(&mut self, outcome: Outcome<ChannelSummary>) {
        if matches!(&outcome, Outcome::Deleted(id) if self.selected == Some(*id))
        {
            self.selected = None;
        }

        self.channels = reconcile(&self.channels, outcome);
    }
}
