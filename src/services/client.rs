//! Raw backend endpoint access.
//!
//! `ApiClient` owns the shared HTTP client and base URL and speaks the
//! backend's wire format: every endpoint except the YouTuber ranking wraps
//! its payload in a `{ success, data, error? }` envelope.

use reqwest::Response;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{
    ApiConfig, ApiResponse, CommentAnalyzeRequest, CommentAnalyzeResponse, CommentHistoryEntry,
    HistoryPage, KeywordAnalyzeRequest, KeywordAnalyzeResponse, KeywordHistoryEntry,
    YouTuberRanking,
};
use crate::utils::http::create_async_client;

/// HTTP client for the analysis backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = create_async_client(config)?;
        Self::from_parts(http, &config.base_url)
    }

    /// Create a client from an existing HTTP client and base URL string.
    pub fn from_parts(http: reqwest::Client, base_url: &str) -> Result<Self> {
        // Endpoint paths are joined relative to the base, so the base must
        // end with a slash or its last segment would be replaced.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)?;
        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Analyze a keyword.
    ///
    /// `POST v1/keywords/analyze`
    pub async fn analyze_keyword(
        &self,
        request: &KeywordAnalyzeRequest,
    ) -> Result<KeywordAnalyzeResponse> {
        self.post_envelope("v1/keywords/analyze", request).await
    }

    /// List previously analyzed keywords.
    ///
    /// `GET v1/keywords/history`
    pub async fn keyword_history(&self) -> Result<HistoryPage<KeywordHistoryEntry>> {
        self.get_envelope("v1/keywords/history").await
    }

    /// Analyze the comments of a video.
    ///
    /// `POST v1/comments/analyze`
    pub async fn analyze_comments(
        &self,
        request: &CommentAnalyzeRequest,
    ) -> Result<CommentAnalyzeResponse> {
        self.post_envelope("v1/comments/analyze", request).await
    }

    /// List previously analyzed videos.
    ///
    /// `GET v1/comments/history`
    pub async fn comment_history(&self) -> Result<HistoryPage<CommentHistoryEntry>> {
        self.get_envelope("v1/comments/history").await
    }

    /// Fetch the YouTuber ranking for a search term.
    ///
    /// `GET v1/youtube/youtubers/ranking`, which returns a bare array
    /// rather than an envelope.
    pub async fn youtuber_ranking(
        &self,
        query: &str,
        max_results: u32,
        top_n: u32,
    ) -> Result<Vec<YouTuberRanking>> {
        let path = "v1/youtube/youtubers/ranking";
        let mut url = self.endpoint(path)?;
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("max_results", &max_results.to_string())
            .append_pair("top_n", &top_n.to_string());

        log::debug!("GET {url}");
        let response = self.http.get(url).send().await?;
        let response = Self::require_success_status(path, response)?;
        Ok(response.json().await?)
    }

    async fn post_envelope<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        log::debug!("POST {url}");
        let response = self.http.post(url).json(body).send().await?;
        Self::decode_envelope(path, response).await
    }

    async fn get_envelope<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        log::debug!("GET {url}");
        let response = self.http.get(url).send().await?;
        Self::decode_envelope(path, response).await
    }

    /// A non-2xx status is a transport-level failure regardless of the body.
    fn require_success_status(path: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            log::warn!("{} returned HTTP {}", path, status.as_u16());
            return Err(AppError::status(status.as_u16(), path));
        }
        Ok(response)
    }

    async fn decode_envelope<T>(path: &str, response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = Self::require_success_status(path, response)?;
        let envelope: ApiResponse<T> = response.json().await?;
        Self::unwrap_envelope(path, envelope)
    }

    fn unwrap_envelope<T>(path: &str, envelope: ApiResponse<T>) -> Result<T> {
        if envelope.success {
            if let Some(data) = envelope.data {
                return Ok(data);
            }
        }

        let message = envelope
            .error
            .or(envelope.message)
            .unwrap_or_else(|| format!("Backend reported failure for {path}"));
        log::warn!("{path} failed: {message}");
        Err(AppError::Backend(message))
    }
}
