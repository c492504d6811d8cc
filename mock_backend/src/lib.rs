//! A small in-memory implementation of the podcast backend's `/api`
//! routes, served on a random local port.
//!
//! It follows the real backend's observable behaviour: default titles and
//! aliases for new channels, `null` for empty lists, cover URLs under
//! `{host}/files/{alias}/cover/`, an `error` marker when a rename hits a
//! taken alias, and a guid plus publication date stamped on first save.

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

mod handlers;
mod store;

pub use store::Store;

pub(crate) type Shared = Arc<Mutex<Store>>;

pub(crate) fn lock(state: &Shared) -> MutexGuard<'_, Store> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle to a running mock backend. The server runs until the tokio
/// runtime that started it shuts down.
#[derive(Debug, Clone)]
pub struct MockBackend {
    state: Shared,
    base_url: String,
}

impl MockBackend {
    /// Starts a backend that accepts every request.
    ///
    /// # Errors
    ///
    /// If no local port can be bound.
    pub async fn start() -> std::io::Result<Self> {
        Self::start_with(None).await
    }

    /// Starts a backend that answers 401 unless the `Authorization` header
    /// equals `authorization`, e.g. `Basic ZmFrZWNhc3Q6c2VjcmV0`.
    ///
    /// # Errors
    ///
    /// If no local port can be bound.
    pub async fn start_with_authorization(
        authorization: &str,
    ) -> std::io::Result<Self> {
        Self::start_with(Some(authorization.to_string())).await
    }

    async fn start_with(
        authorization: Option<String>,
    ) -> std::io::Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);

        let mut store = Store::new(base_url.clone());
        store.required_authorization = authorization;
        let state: Shared = Arc::new(Mutex::new(store));

        let app = router(state.clone());

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("mock backend stopped: {e}");
            }
        });

        tracing::info!("mock backend listening on {base_url}");

        Ok(Self { state, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Direct access to the backend state, for seeding and assertions.
    #[must_use]
    pub fn store(&self) -> MutexGuard<'_, Store> {
        lock(&self.state)
    }
}

fn router(state: Shared) -> Router {
    let api = Router::new()
        .route("/list", get(handlers::list))
        .route("/channel", post(handlers::create_channel))
        .route(
            "/channel/{channel}",
            get(handlers::overview)
                .put(handlers::update_channel)
                .delete(handlers::delete_channel),
        )
        .route("/channel/{channel}/upload", post(handlers::upload_podcast))
        .route(
            "/channel/{channel}/cover/upload",
            post(handlers::upload_cover),
        )
        .route(
            "/channel/{channel}/cover/{cover}",
            delete(handlers::delete_cover),
        )
        .route(
            "/channel/{channel}/podcast/{podcast}",
            get(handlers::podcast_info)
                .put(handlers::update_podcast)
                .delete(handlers::delete_podcast),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            handlers::authorize,
        ));

    Router::new().nest("/api", api).with_state(state)
}
