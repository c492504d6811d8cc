use crate::{ApiConfig, ApiError, Credential};
use reqwest::{
    Method, RequestBuilder, Response,
    multipart::{Form, Part},
};
use types::{
    Channel, ChannelSummary, CoverResponse, Overview, Podcast,
    UpdateChannelRequest, UpdateChannelResponse,
};

/// Result of a channel update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelUpdate {
    /// The update was stored. `cover` is the cover URL under the channel's
    /// current alias, empty when the channel has no cover.
    Updated { cover: String },
    /// The new alias is taken. The backend kept the old alias.
    AliasConflict,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    host: String,
    credential: Option<Credential>,
}

impl ApiClient {
    /// Creates a client for the backend at `config.api_host`.
    ///
    /// # Errors
    ///
    /// If the host is not an absolute URL or the HTTP client cannot be
    /// built.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let host = config.api_host.trim_end_matches('/').to_string();

        if reqwest::Url::parse(&host).is_err() {
            return Err(ApiError::InvalidHost(config.api_host.clone()));
        }

        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            host,
            credential: config.credential(),
        })
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/api{path}", self.host);
        tracing::info!("sending request: {method} {url}");

        let request = self.http.request(method, url);

        match &self.credential {
            Some(credential) => request.basic_auth(
                &credential.user,
                Some(credential.password.expose_secret()),
            ),
            None => request,
        }
    }

    async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!("request failed with status {status}: {body}");

        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    /// `GET /api/list`
    #[tracing::instrument(skip(self))]
    pub async fn list_channels(&self) -> Result<Vec<ChannelSummary>, ApiError> {
        let response = Self::send(self.request(Method::GET, "/list")).await?;

        // an empty store is encoded as `null`
        let channels: Option<Vec<ChannelSummary>> = response.json().await?;

        Ok(channels.unwrap_or_default())
    }

    /// `POST /api/channel`
    #[tracing::instrument(skip(self))]
    pub async fn create_channel(&self) -> Result<Channel, ApiError> {
        let response =
            Self::send(self.request(Method::POST, "/channel")).await?;

        let channel: Channel = response.json().await?;
        tracing::info!("created channel {}", channel.id);

        Ok(channel)
    }

    /// `GET /api/channel/{id}`
    #[tracing::instrument(skip(self))]
    pub async fn channel(&self, id: i64) -> Result<Overview, ApiError> {
        let response =
            Self::send(self.request(Method::GET, &format!("/channel/{id}")))
                .await?;

        Ok(response.json().await?)
    }

    /// `PUT /api/channel/{id}`
    ///
    /// The cover is sent as its bare filename, which is how the backend
    /// stores it.
    #[tracing::instrument(skip(self, channel))]
    pub async fn update_channel(
        &self,
        id: i64,
        channel: &Channel,
        old_alias: &str,
    ) -> Result<ChannelUpdate, ApiError> {
        let body = UpdateChannelRequest {
            channel: Channel {
                cover: channel.cover_filename().to_string(),
                ..channel.clone()
            },
            old_alias: old_alias.to_string(),
        };

        let response = Self::send(
            self.request(Method::PUT, &format!("/channel/{id}")).json(&body),
        )
        .await?;

        let result: UpdateChannelResponse = response.json().await?;

        if result.is_alias_conflict() {
            tracing::warn!(
                "alias {new:?} rejected for channel {id}, keeping {old_alias:?}",
                new = channel.alias
            );
            return Ok(ChannelUpdate::AliasConflict);
        }

        Ok(ChannelUpdate::Updated {
            cover: result.cover,
        })
    }

    /// `DELETE /api/channel/{id}`
    #[tracing::instrument(skip(self))]
    pub async fn delete_channel(&self, id: i64) -> Result<(), ApiError> {
        Self::send(self.request(Method::DELETE, &format!("/channel/{id}")))
            .await?;

        Ok(())
    }

    /// `POST /api/channel/{id}/upload`
    ///
    /// The backend stores the episode unpublished and titles it after the
    /// file name.
    #[tracing::instrument(skip(self, bytes))]
    pub async fn upload_podcast(
        &self,
        channel_id: i64,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<Podcast, ApiError> {
        let length = bytes.len();
        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(filename.to_string()))
            .text("length", length.to_string());

        let response = Self::send(
            self.request(Method::POST, &format!("/channel/{channel_id}/upload"))
                .multipart(form),
        )
        .await?;

        let podcast: Podcast = response.json().await?;
        tracing::info!("uploaded {filename} as podcast {}", podcast.id);

        Ok(podcast)
    }

    /// `POST /api/channel/{id}/cover/upload`, returns the new cover URL.
    #[tracing::instrument(skip(self, bytes))]
    pub async fn upload_cover(
        &self,
        channel_id: i64,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ApiError> {
        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(filename.to_string()));

        let response = Self::send(
            self.request(
                Method::POST,
                &format!("/channel/{channel_id}/cover/upload"),
            )
            .multipart(form),
        )
        .await?;

        let cover: CoverResponse = response.json().await?;

        Ok(cover.cover)
    }

    /// `DELETE /api/channel/{id}/cover/{filename}`
    #[tracing::instrument(skip(self))]
    pub async fn delete_cover(
        &self,
        channel_id: i64,
        filename: &str,
    ) -> Result<(), ApiError> {
        Self::send(self.request(
            Method::DELETE,
            &format!("/channel/{channel_id}/cover/{filename}"),
        ))
        .await?;

        Ok(())
    }

    /// `GET /api/channel/{cid}/podcast/{pid}`
    #[tracing::instrument(skip(self))]
    pub async fn podcast(
        &self,
        channel_id: i64,
        podcast_id: i64,
    ) -> Result<Podcast, ApiError> {
        let response = Self::send(self.request(
            Method::GET,
            &format!("/channel/{channel_id}/podcast/{podcast_id}"),
        ))
        .await?;

        Ok(response.json().await?)
    }

    /// `PUT /api/channel/{cid}/podcast/{pid}`
    #[tracing::instrument(skip(self, podcast), fields(podcast_id = podcast.id))]
    pub async fn update_podcast(
        &self,
        channel_id: i64,
        podcast: &Podcast,
    ) -> Result<(), ApiError> {
        Self::send(
            self.request(
                Method::PUT,
                &format!("/channel/{channel_id}/podcast/{}", podcast.id),
            )
            .json(podcast),
        )
        .await?;

        Ok(())
    }

    /// `DELETE /api/channel/{cid}/podcast/{pid}`
    #[tracing::instrument(skip(self))]
    pub async fn delete_podcast(
        &self,
        channel_id: i64,
        podcast_id: i64,
    ) -> Result<(), ApiError> {
        Self::send(self.request(
            Method::DELETE,
            &format!("/channel/{channel_id}/podcast/{podcast_id}"),
        ))
        .await?;

        Ok(())
    }
}
