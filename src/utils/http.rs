// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use crate::error::Result;
use crate::models::ApiConfig;

/// Create a configured asynchronous HTTP client.
///
/// The client is process-wide, read-only configuration: instances share it
/// and never mutate it after construction.
pub fn create_async_client(config: &ApiConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}
