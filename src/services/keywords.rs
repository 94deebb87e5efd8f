//! Keyword analysis service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::analysis::AnalysisBackend;
use crate::error::Result;
use crate::models::{
    ErrorInfo, HistoryPage, KeywordAnalyzeRequest, KeywordAnalyzeResponse, KeywordHistoryEntry,
};
use crate::services::ApiClient;

/// Submits keyword analyses and lists past ones.
pub struct KeywordService {
    client: Arc<ApiClient>,
}

impl KeywordService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List previously analyzed keywords.
    pub async fn history(&self) -> Result<HistoryPage<KeywordHistoryEntry>> {
        self.client.keyword_history().await
    }
}

#[async_trait]
impl AnalysisBackend for KeywordService {
    type Input = KeywordAnalyzeRequest;
    type Output = KeywordAnalyzeResponse;

    fn validate(&self, input: &Self::Input) -> std::result::Result<(), ErrorInfo> {
        if input.keyword.trim().is_empty() {
            return Err(ErrorInfo::validation("키워드를 입력해주세요"));
        }
        Ok(())
    }

    async fn fetch(&self, input: &Self::Input) -> Result<Self::Output> {
        let request = KeywordAnalyzeRequest::new(input.keyword.trim());
        self.client.analyze_keyword(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApiConfig, ErrorKind};

    fn service() -> KeywordService {
        let client = ApiClient::new(&ApiConfig::default()).unwrap();
        KeywordService::new(Arc::new(client))
    }

    #[test]
    fn test_empty_keyword_rejected_locally() {
        let service = service();
        let error = service
            .validate(&KeywordAnalyzeRequest::new(""))
            .unwrap_err();
        assert_eq!(error.kind, ErrorKind::Validation);
        assert_eq!(error.message, "키워드를 입력해주세요");
    }

    #[test]
    fn test_whitespace_keyword_rejected_locally() {
        let service = service();
        assert!(service.validate(&KeywordAnalyzeRequest::new("  \t ")).is_err());
    }

    #[test]
    fn test_nonempty_keyword_accepted() {
        let service = service();
        assert!(service.validate(&KeywordAnalyzeRequest::new("파이썬 강의")).is_ok());
    }
}
