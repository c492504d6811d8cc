use crate::{ScreenError, TITLE_EMPTY};
use fc_api::ApiClient;
use form_state::{
    DurationPart, DurationParts, ErrorMap, Field, FieldConfig, Messages,
    Outcome, bind_update, decode, duration_update, encode, field, from_record,
    messages, number_update, to_record, trim_entity,
};
use types::Podcast;

fn required() -> Messages {
    messages([("title", TITLE_EMPTY)])
}

/// An edit coming from one of the episode inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EpisodeEdit {
    Text(&'static str, String),
    Number(&'static str, String),
    Duration(DurationPart, String),
}

/// Editor for a single episode. Publishing is its first save.
#[derive(Debug, Clone)]
pub struct EpisodeScreen {
    api: ApiClient,
    channel_id: i64,
    details: Option<Podcast>,
    duration: DurationParts,
    saved: bool,
    errors: ErrorMap,
}

impl EpisodeScreen {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self {
            api,
            channel_id: 0,
            details: None,
            duration: DurationParts { h: 0, m: 0, s: 0 },
            saved: false,
            errors: ErrorMap::new(),
        }
    }

    #[must_use]
    pub const fn podcast(&self) -> Option<&Podcast> {
        self.details.as_ref()
    }

    #[must_use]
    pub const fn duration(&self) -> DurationParts {
        self.duration
    }

    #[must_use]
    pub const fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    fn loaded(&self) -> Result<&Podcast, ScreenError> {
        self.details.as_ref().ok_or(ScreenError::NothingLoaded)
    }

    /// Opens an episode. An unpublished episode can be published right
    /// away, so it starts out saveable.
    ///
    /// # Errors
    ///
    /// If the request fails.
    pub async fn load(
        &mut self,
        channel_id: i64,
        podcast_id: i64,
    ) -> Result<(), ScreenError> {
        let podcast = self.api.podcast(channel_id, podcast_id).await?;

        self.channel_id = channel_id;
        self.saved = podcast.published == 0;
        self.duration = decode(podcast.duration);
        self.details = Some(podcast);
        self.errors.clear();

        Ok(())
    }

    /// Sets a text field. The title is required.
    ///
    /// # Errors
    ///
    /// [`ScreenError::NothingLoaded`] without an episode, or
    /// [`ScreenError::State`] if the value does not fit the field.
    pub fn edit(&mut self, field: &str, raw: &str) -> Result<(), ScreenError> {
        let record = to_record(self.loaded()?)?;
        let update =
            bind_update(&required(), &record, &self.errors)(raw, field);

        self.details = Some(from_record(update.updated)?);
        self.errors = update.err;
        self.saved = update.changed;

        Ok(())
    }

    /// Sets season or episode from raw input.
    ///
    /// # Errors
    ///
    /// As for [`Self::edit`].
    pub fn edit_number(
        &mut self,
        field: &str,
        raw: &str,
    ) -> Result<(), ScreenError> {
        let record = to_record(self.loaded()?)?;
        let update = number_update(&record, field, raw);

        self.details = Some(from_record(update.updated)?);
        self.saved = update.changed;

        Ok(())
    }

    pub fn edit_duration(&mut self, part: DurationPart, raw: &str) {
        self.duration = duration_update(self.duration, part, raw);
        self.saved = true;
    }

    /// # Errors
    ///
    /// [`ScreenError::NothingLoaded`] without an episode.
    pub fn set_explicit(&mut self, explicit: bool) -> Result<(), ScreenError> {
        let details =
            self.details.as_mut().ok_or(ScreenError::NothingLoaded)?;

        details.explicit = u8::from(explicit);
        self.saved = true;

        Ok(())
    }

    /// Routes an edit produced by one of [`Self::fields`].
    ///
    /// # Errors
    ///
    /// As for [`Self::edit`].
    pub fn apply_edit(
        &mut self,
        edit: EpisodeEdit,
    ) -> Result<(), ScreenError> {
        match edit {
            EpisodeEdit::Text(name, raw) => self.edit(name, &raw),
            EpisodeEdit::Number(name, raw) => self.edit_number(name, &raw),
            EpisodeEdit::Duration(part, raw) => {
                self.edit_duration(part, &raw);
                Ok(())
            }
        }
    }

    /// Label of the save action.
    #[must_use]
    pub fn action_label(&self) -> &'static str {
        match &self.details {
            Some(podcast) if podcast.published != 0 => "Save",
            _ => "Publish",
        }
    }

    #[must_use]
    pub const fn can_save(&self) -> bool {
        self.saved
    }

    /// Saves and publishes the episode, then closes the screen. Returns the
    /// stored episode for the channel's episode list.
    ///
    /// # Errors
    ///
    /// [`ScreenError::Invalid`] while Save is disabled or a field error is
    /// pending. Numeric edits enable Save without clearing errors, so both
    /// are checked. Otherwise if nothing is loaded or the request fails.
    /// The screen is left as it was.
    pub async fn save(&mut self) -> Result<Outcome<Podcast>, ScreenError> {
        let details = self.loaded()?;
        if !self.saved || !self.errors.is_empty() {
            return Err(ScreenError::Invalid(self.errors.clone()));
        }

        let mut podcast = trim_entity(details)?;
        podcast.duration = encode(self.duration);
        podcast.published = 1;

        self.api.update_podcast(self.channel_id, &podcast).await?;
        tracing::info!("published podcast {}", podcast.id);

        self.close();

        Ok(Outcome::Updated(podcast))
    }

    /// # Errors
    ///
    /// If nothing is loaded or the request fails.
    pub async fn delete(&mut self) -> Result<Outcome<Podcast>, ScreenError> {
        let id = self.loaded()?.id;

        self.api.delete_podcast(self.channel_id, id).await?;

        self.close();

        Ok(Outcome::Deleted(id))
    }

    /// Closes the screen without saving.
    pub fn cancel(&mut self) {
        self.details = None;
        self.errors.clear();
    }

    fn close(&mut self) {
        self.cancel();
        self.saved = false;
        self.duration = DurationParts::default();
    }

    /// Inputs of the episode editor, in display order. The explicit switch
    /// is not a text input and goes through [`Self::set_explicit`].
    #[must_use]
    pub fn fields(&self) -> Vec<Field<'static, EpisodeEdit>> {
        let Some(p) = &self.details else {
            return Vec::new();
        };
        let d = self.duration;

        vec![
            field(
                FieldConfig::new("Title", p.title.as_str(), |raw| {
                    EpisodeEdit::Text("title", raw)
                })
                .error(self.errors.get("title")),
            ),
            field(
                FieldConfig::new("Season", p.season, |raw| {
                    EpisodeEdit::Number("season", raw)
                })
                .number(),
            ),
            field(
                FieldConfig::new("Episode", p.episode, |raw| {
                    EpisodeEdit::Number("episode", raw)
                })
                .number(),
            ),
            field(
                FieldConfig::new("Description", p.description.as_str(), |raw| {
                    EpisodeEdit::Text("description", raw)
                })
                .rows(2),
            ),
            field(
                FieldConfig::new("Hours", d.h, |raw| {
                    EpisodeEdit::Duration(DurationPart::Hours, raw)
                })
                .number(),
            ),
            field(
                FieldConfig::new("Minutes", d.m, |raw| {
                    EpisodeEdit::Duration(DurationPart::Minutes, raw)
                })
                .number(),
            ),
            field(
                FieldConfig::new("Seconds", d.s, |raw| {
                    EpisodeEdit::Duration(DurationPart::Seconds, raw)
                })
                .number(),
            ),
        ]
    }
}
