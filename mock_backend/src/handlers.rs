use crate::{Shared, lock};
use axum::{
    Json,
    extract::{Multipart, Path, Request, State, multipart::MultipartError},
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use types::{CoverResponse, Podcast, UpdateChannelRequest, UpdateChannelResponse};

type Failure = (StatusCode, Json<Value>);

fn not_found(what: &str) -> Failure {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": format!("{what} not found") })),
    )
}

fn bad_request(e: &MultipartError) -> Failure {
    tracing::warn!("rejecting upload: {e}");
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": "invalid multipart body" })),
    )
}

/// Records the `Authorization` header and enforces the configured one.
pub async fn authorize(
    State(state): State<Shared>,
    request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let allowed = {
        let mut store = lock(&state);
        store.authorizations.push(header.clone());
        store
            .required_authorization
            .as_ref()
            .is_none_or(|required| header.as_ref() == Some(required))
    };

    if !allowed {
        return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
    }

    next.run(request).await
}

pub async fn list(State(state): State<Shared>) -> Json<Value> {
    let summaries = lock(&state).summaries();

    if summaries.is_empty() {
        return Json(Value::Null);
    }
    Json(json!(summaries))
}

pub async fn create_channel(State(state): State<Shared>) -> Json<Value> {
    let mut store = lock(&state);
    let channel = store.add_channel();
    tracing::info!("mock backend created channel {}", channel.id);

    Json(json!(channel))
}

pub async fn overview(
    State(state): State<Shared>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, Failure> {
    let store = lock(&state);
    let info = store.channel_view(id).ok_or_else(|| not_found("channel"))?;
    let podcasts = store.podcasts_of(id);

    let podcasts = if podcasts.is_empty() {
        Value::Null
    } else {
        json!(podcasts)
    };

    Ok(Json(json!({ "info": info, "podcasts": podcasts })))
}

pub async fn update_channel(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateChannelRequest>,
) -> Result<Json<UpdateChannelResponse>, Failure> {
    let mut store = lock(&state);
    let mut channel = body.channel;
    channel.id = id;

    let mut conflict = false;
    if channel.alias != body.old_alias && store.alias_taken(&channel.alias, id)
    {
        channel.alias = body.old_alias;
        conflict = true;
    }

    let cover = store.cover_url(&channel.alias, &channel.cover);
    if !store.put_channel(channel) {
        return Err(not_found("channel"));
    }

    Ok(Json(UpdateChannelResponse {
        cover,
        error: conflict.then_some(Value::Bool(true)),
    }))
}

pub async fn delete_channel(
    State(state): State<Shared>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Failure> {
    if lock(&state).remove_channel(id) {
        Ok(StatusCode::OK)
    } else {
        Err(not_found("channel"))
    }
}

pub async fn upload_podcast(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> Result<Json<Podcast>, Failure> {
    let mut filename = String::new();
    let mut length = 0;

    while let Some(field) =
        multipart.next_field().await.map_err(|e| bad_request(&e))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                filename = field.file_name().unwrap_or_default().to_string();
                field.bytes().await.map_err(|e| bad_request(&e))?;
            }
            "length" => {
                let text = field.text().await.map_err(|e| bad_request(&e))?;
                length = text.parse().unwrap_or_default();
            }
            _ => {}
        }
    }

    let mut store = lock(&state);
    if store.channel(id).is_none() {
        return Err(not_found("channel"));
    }

    Ok(Json(store.add_podcast(id, &filename, length)))
}

pub async fn upload_cover(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> Result<Json<CoverResponse>, Failure> {
    let mut filename = String::new();

    while let Some(field) =
        multipart.next_field().await.map_err(|e| bad_request(&e))?
    {
        if field.name() == Some("file") {
            filename = field.file_name().unwrap_or_default().to_string();
            field.bytes().await.map_err(|e| bad_request(&e))?;
        }
    }

    let mut store = lock(&state);
    let channel = store.channel_mut(id).ok_or_else(|| not_found("channel"))?;
    channel.cover.clone_from(&filename);
    let alias = channel.alias.clone();

    Ok(Json(CoverResponse {
        cover: store.cover_url(&alias, &filename),
    }))
}

pub async fn delete_cover(
    State(state): State<Shared>,
    Path((id, cover)): Path<(i64, String)>,
) -> Result<StatusCode, Failure> {
    let mut store = lock(&state);
    let channel = store.channel_mut(id).ok_or_else(|| not_found("channel"))?;

    if channel.cover != cover {
        return Err(not_found("cover"));
    }
    channel.cover.clear();

    Ok(StatusCode::OK)
}

pub async fn podcast_info(
    State(state): State<Shared>,
    Path((_, podcast_id)): Path<(i64, i64)>,
) -> Result<Json<Podcast>, Failure> {
    lock(&state)
        .podcast(podcast_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("podcast"))
}

pub async fn update_podcast(
    State(state): State<Shared>,
    Path((_, podcast_id)): Path<(i64, i64)>,
    Json(mut podcast): Json<Podcast>,
) -> Result<StatusCode, Failure> {
    podcast.id = podcast_id;

    // first save stamps the episode for the feed
    if podcast.guid.as_deref().unwrap_or_default().is_empty() {
        let now = chrono::Utc::now();
        podcast.guid = Some(format!("{:x}", now.timestamp()));
        podcast.pub_date =
            Some(now.format("%a, %-d %b %Y %H:%M:%S UTC").to_string());
    }

    if lock(&state).put_podcast(podcast) {
        Ok(StatusCode::OK)
    } else {
        Err(not_found("podcast"))
    }
}

pub async fn delete_podcast(
    State(state): State<Shared>,
    Path((_, podcast_id)): Path<(i64, i64)>,
) -> Result<StatusCode, Failure> {
    if lock(&state).remove_podcast(podcast_id) {
        Ok(StatusCode::OK)
    } else {
        Err(not_found("podcast"))
    }
}
