use crate::ScreenError;
use fc_api::{ApiClient, ChannelUpdate};
use form_state::{
    ErrorMap, Field, FieldConfig, Messages, Outcome, Update, alias_update,
    bind_update, field, from_record, messages, reconcile, to_record,
    trim_entity,
};
use types::{Channel, ChannelSummary, Podcast};

pub const TITLE_EMPTY: &str = "Title must not be empty";
pub const ALIAS_EMPTY: &str = "Alias must not be empty";
pub const ALIAS_INVALID: &str = "Alias has incorrect symbols";
pub const ALIAS_IN_USE: &str = "Can't use this name, it may be already in use";

fn required() -> Messages {
    messages([("title", TITLE_EMPTY), ("alias", ALIAS_EMPTY)])
}

/// An edit coming from one of the channel inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelEdit {
    Text(&'static str, String),
    Alias(String),
}

/// Editor for one channel and its episode list.
#[derive(Debug, Clone)]
pub struct ChannelScreen {
    api: ApiClient,
    info: Option<Channel>,
    /// Alias as last stored by the backend.
    alias: String,
    errors: ErrorMap,
    changed: bool,
    podcasts: Vec<Podcast>,
}

impl ChannelScreen {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self {
            api,
            info: None,
            alias: String::new(),
            errors: ErrorMap::new(),
            changed: false,
            podcasts: Vec::new(),
        }
    }

    #[must_use]
    pub const fn channel(&self) -> Option<&Channel> {
        self.info.as_ref()
    }

    #[must_use]
    pub fn old_alias(&self) -> &str {
        &self.alias
    }

    #[must_use]
    pub const fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Whether Save is enabled.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.changed
    }

    #[must_use]
    pub fn podcasts(&self) -> &[Podcast] {
        &self.podcasts
    }

    #[must_use]
    pub fn feed_url(&self) -> Option<String> {
        self.info.as_ref().map(Channel::feed_url)
    }

    fn loaded(&self) -> Result<&Channel, ScreenError> {
        self.info.as_ref().ok_or(ScreenError::NothingLoaded)
    }

    /// Opens a channel. Errors, the changed flag and the episode list
    /// start over.
    ///
    /// # Errors
    ///
    /// If the request fails. The screen keeps what it had.
    pub async fn load(&mut self, id: i64) -> Result<(), ScreenError> {
        let overview = self.api.channel(id).await?;

        self.alias.clone_from(&overview.info.alias);
        self.info = Some(overview.info);
        self.podcasts = overview.podcasts;
        self.errors.clear();
        self.changed = false;

        Ok(())
    }

    /// Sets a text field to the raw input. Title and alias are required.
    ///
    /// # Errors
    ///
    /// [`ScreenError::NothingLoaded`] without a channel, or
    /// [`ScreenError::State`] if the value does not fit the field.
    pub fn edit(&mut self, field: &str, raw: &str) -> Result<(), ScreenError> {
        let record = to_record(self.loaded()?)?;
        let update =
            bind_update(&required(), &record, &self.errors)(raw, field);

        self.apply_update(update)
    }

    /// Sets the alias, which must also be URL safe.
    ///
    /// # Errors
    ///
    /// [`ScreenError::NothingLoaded`] without a channel.
    pub fn edit_alias(&mut self, raw: &str) -> Result<(), ScreenError> {
        let record = to_record(self.loaded()?)?;
        let update = alias_update(
            &required(),
            &record,
            &self.errors,
            raw,
            "alias",
            ALIAS_INVALID,
        );

        self.apply_update(update)
    }

    /// Routes an edit produced by one of [`Self::fields`].
    ///
    /// # Errors
    ///
    /// As for [`Self::edit`].
    pub fn apply_edit(
        &mut self,
        edit: ChannelEdit,
    ) -> Result<(), ScreenError> {
        match edit {
            ChannelEdit::Text(name, raw) => self.edit(name, &raw),
            ChannelEdit::Alias(raw) => self.edit_alias(&raw),
        }
    }

    fn apply_update(&mut self, update: Update) -> Result<(), ScreenError> {
        self.info = Some(from_record(update.updated)?);
        self.errors = update.err;
        self.changed = update.changed;

        Ok(())
    }

    /// Sends the trimmed channel to the backend.
    ///
    /// Returns the summary to fold into the channel list, or `None` when
    /// the new alias is taken. In that case the alias error is shown and
    /// the old alias stays in effect.
    ///
    /// # Errors
    ///
    /// [`ScreenError::Invalid`] while Save is disabled, without contacting
    /// the backend. Otherwise if nothing is loaded or the request fails.
    pub async fn save(
        &mut self,
    ) -> Result<Option<Outcome<ChannelSummary>>, ScreenError> {
        let channel = self.loaded()?;
        if !self.changed {
            return Err(ScreenError::Invalid(self.errors.clone()));
        }

        let mut trimmed = trim_entity(channel)?;

        let result = self
            .api
            .update_channel(trimmed.id, &trimmed, &self.alias)
            .await?;

        let cover = match result {
            ChannelUpdate::AliasConflict => {
                self.errors
                    .insert("alias".to_string(), ALIAS_IN_USE.to_string());
                self.changed = false;
                self.info = Some(trimmed);
                return Ok(None);
            }
            ChannelUpdate::Updated { cover } => cover,
        };

        let summary = ChannelSummary::from(&trimmed);

        // the cover lives under the alias, so it moves with it
        if self.alias != trimmed.alias {
            self.alias.clone_from(&trimmed.alias);
            trimmed.cover = cover;
        }

        self.info = Some(trimmed);
        self.changed = false;

        Ok(Some(Outcome::Updated(summary)))
    }

    /// Deletes the channel and clears the screen.
    ///
    /// # Errors
    ///
    /// If nothing is loaded or the request fails.
    pub async fn delete(
        &mut self,
    ) -> Result<Outcome<ChannelSummary>, ScreenError> {
        let id = self.loaded()?.id;

        self.api.delete_channel(id).await?;

        self.info = None;
        self.alias.clear();
        self.podcasts.clear();
        self.errors.clear();
        self.changed = false;

        Ok(Outcome::Deleted(id))
    }

    /// Uploads an episode file. The new episode goes first in the list and
    /// its id is returned so it can be opened for editing.
    ///
    /// # Errors
    ///
    /// If nothing is loaded or the request fails.
    pub async fn upload_podcast(
        &mut self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<i64, ScreenError> {
        let id = self.loaded()?.id;

        let podcast = self.api.upload_podcast(id, filename, bytes).await?;
        let podcast_id = podcast.id;
        self.podcasts = reconcile(&self.podcasts, Outcome::Created(podcast));

        Ok(podcast_id)
    }

    /// # Errors
    ///
    /// If nothing is loaded or the request fails.
    pub async fn upload_cover(
        &mut self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ScreenError> {
        let id = self.loaded()?.id;

        let cover = self.api.upload_cover(id, filename, bytes).await?;

        if let Some(info) = self.info.as_mut() {
            info.cover = cover;
        }

        Ok(())
    }

    /// Removes the cover. The working copy comes back trimmed.
    ///
    /// # Errors
    ///
    /// If nothing is loaded or the request fails.
    pub async fn delete_cover(&mut self) -> Result<(), ScreenError> {
        let channel = self.loaded()?;
        if channel.cover.is_empty() {
            return Ok(());
        }

        self.api
            .delete_cover(channel.id, channel.cover_filename())
            .await?;

        let trimmed = trim_entity(channel)?;
        self.info = Some(Channel {
            cover: String::new(),
            ..trimmed
        });

        Ok(())
    }

    /// Folds a mutation from the episode screen into the episode list.
    pub fn apply_episode(&mut self, outcome: Outcome<Podcast>) {
        self.podcasts = reconcile(&self.podcasts, outcome);
    }

    /// Inputs of the channel editor, in display order. Empty when nothing
    /// is loaded.
    #[must_use]
    pub fn fields(&self) -> Vec<Field<'static, ChannelEdit>> {
        let Some(c) = &self.info else {
            return Vec::new();
        };

        vec![
            field(
                FieldConfig::new("Author", c.author.as_str(), |raw| {
                    ChannelEdit::Text("author", raw)
                })
                .class_name("left-input"),
            ),
            field(
                FieldConfig::new("Title", c.title.as_str(), |raw| {
                    ChannelEdit::Text("title", raw)
                })
                .error(self.errors.get("title")),
            ),
            field(
                FieldConfig::new("Alias", c.alias.as_str(), ChannelEdit::Alias)
                    .error(self.errors.get("alias")),
            ),
            field(
                FieldConfig::new("Description", c.description.as_str(), |raw| {
                    ChannelEdit::Text("description", raw)
                })
                .rows(2),
            ),
        ]
    }
}
