use fc_api::{ApiClient, ApiConfig, ApiError};

/// Everything the screens need, built once at startup.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub api: ApiClient,
    pub config: ApiConfig,
}

impl fc_app::ContextProvider<ApiConfig> for AppContext {
    type Error = ApiError;

    async fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let api = ApiClient::new(&config)?;
        tracing::info!("using backend at {}", api.host());

        Ok(Self { api, config })
    }
}
