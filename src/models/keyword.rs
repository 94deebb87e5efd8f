//! Keyword analysis data structures.

use serde::{Deserialize, Serialize};

/// Request body for keyword analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeywordAnalyzeRequest {
    /// Keyword to analyze (e.g., "파이썬 강의")
    pub keyword: String,
}

impl KeywordAnalyzeRequest {
    /// Create a request for the given keyword.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }
}

/// Aggregate metrics for a keyword.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordMetrics {
    /// Estimated monthly search volume
    pub search_volume: u64,

    /// Competition level, 0.0 (low) to 1.0 (high)
    pub competition: f64,

    /// Recommendation score, 0.0 to 1.0
    pub recommendation_score: f64,
}

/// A related keyword suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelatedKeyword {
    /// Suggested keyword
    pub keyword: String,

    /// Estimated search volume
    pub search_volume: u64,

    /// Competition level, 0.0 to 1.0
    pub competition: f64,
}

/// Result of a keyword analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordAnalyzeResponse {
    /// The analyzed keyword
    pub keyword: String,

    /// Aggregate metrics
    pub metrics: KeywordMetrics,

    /// Related keyword suggestions, ordered by relevance
    #[serde(default)]
    pub related_keywords: Vec<RelatedKeyword>,

    /// Analysis timestamp as sent by the backend
    pub analyzed_at: String,
}

/// A stored keyword analysis, as listed by the history endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordHistoryEntry {
    /// Entry identifier
    #[serde(default)]
    pub id: String,

    /// The analyzed keyword
    pub keyword: String,

    /// Estimated search volume at analysis time
    #[serde(default)]
    pub search_volume: u64,

    /// Competition level at analysis time
    #[serde(default)]
    pub competition: f64,

    /// Analysis timestamp
    pub analyzed_at: String,
}
