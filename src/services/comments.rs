//! Comment analysis service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::analysis::AnalysisBackend;
use crate::error::Result;
use crate::models::{
    CommentAnalyzeRequest, CommentAnalyzeResponse, CommentHistoryEntry, ErrorInfo, HistoryPage,
};
use crate::services::ApiClient;
use crate::utils::url::is_valid_video_url;

/// Submits comment analyses and lists past ones.
pub struct CommentService {
    client: Arc<ApiClient>,
}

impl CommentService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List previously analyzed videos.
    pub async fn history(&self) -> Result<HistoryPage<CommentHistoryEntry>> {
        self.client.comment_history().await
    }
}

#[async_trait]
impl AnalysisBackend for CommentService {
    type Input = CommentAnalyzeRequest;
    type Output = CommentAnalyzeResponse;

    fn validate(&self, input: &Self::Input) -> std::result::Result<(), ErrorInfo> {
        let url = input.video_url.trim();
        if url.is_empty() {
            return Err(ErrorInfo::validation("YouTube URL을 입력해주세요"));
        }
        if !is_valid_video_url(url) {
            return Err(ErrorInfo::validation("유효한 YouTube URL을 입력해주세요"));
        }
        Ok(())
    }

    async fn fetch(&self, input: &Self::Input) -> Result<Self::Output> {
        let request = CommentAnalyzeRequest {
            video_url: input.video_url.trim().to_string(),
            max_results: input.max_results,
        };
        self.client.analyze_comments(&request).await
    }
}
