use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid api host {0:?}")]
    InvalidHost(String),
}
