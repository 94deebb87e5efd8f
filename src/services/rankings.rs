//! YouTuber ranking service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::analysis::RankingSource;
use crate::error::Result;
use crate::models::{RankingConfig, YouTuberRanking};
use crate::services::ApiClient;

/// Fetches YouTuber rankings with configured query bounds.
pub struct RankingService {
    client: Arc<ApiClient>,
    config: RankingConfig,
}

impl RankingService {
    pub fn new(client: Arc<ApiClient>, config: RankingConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl RankingSource for RankingService {
    async fn ranking(&self, term: &str) -> Result<Vec<YouTuberRanking>> {
        self.client
            .youtuber_ranking(term, self.config.max_results, self.config.top_n)
            .await
    }
}
