/**
 * Client for the podcast backend.
 *
 * Every endpoint of the backend is exposed as an async method on
 * [`ApiClient`]. Payloads are JSON except the two uploads, which are
 * multipart forms.
 */
mod client;
mod config;
mod error;

pub use client::{ApiClient, ChannelUpdate};
pub use config::{ApiConfig, Credential, DEFAULT_API_HOST, DEFAULT_USER};
pub use error::ApiError;
