// src/models/mod.rs

//! Domain models for the client core.
//!
//! This module contains all data structures exchanged with the backend,
//! organized by analysis domain. Field names follow the backend's
//! snake_case wire format exactly.

mod comment;
mod config;
mod error_info;
mod keyword;
mod ranking;

use serde::{Deserialize, Serialize};

// Re-export all public types
pub use comment::{
    CommentAnalyzeRequest, CommentAnalyzeResponse, CommentEntry, CommentHistoryEntry,
    FrequentWord, Sentiment, VideoInfo,
};
pub use config::{ApiConfig, Config, RankingConfig};
pub use error_info::{ErrorInfo, ErrorKind};
pub use keyword::{
    KeywordAnalyzeRequest, KeywordAnalyzeResponse, KeywordHistoryEntry, KeywordMetrics,
    RelatedKeyword,
};
pub use ranking::YouTuberRanking;

/// Common response envelope used by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,

    /// Payload, present on success
    #[serde(default)]
    pub data: Option<T>,

    /// Error description, present on failure
    #[serde(default)]
    pub error: Option<String>,

    /// Optional informational message
    #[serde(default)]
    pub message: Option<String>,
}

/// A page of history entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct HistoryPage<T> {
    /// Entries, most recent first
    #[serde(default)]
    pub items: Vec<T>,

    /// Total number of stored entries
    #[serde(default)]
    pub total: u64,
}
