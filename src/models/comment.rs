//! Comment analysis data structures.

use serde::{Deserialize, Serialize};

/// Request body for comment analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentAnalyzeRequest {
    /// YouTube video URL
    pub video_url: String,

    /// Maximum number of comments to fetch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
}

impl CommentAnalyzeRequest {
    /// Create a request for the given video URL.
    pub fn new(video_url: impl Into<String>) -> Self {
        Self {
            video_url: video_url.into(),
            max_results: None,
        }
    }

    /// Set the maximum number of comments to fetch.
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

/// Basic information about the analyzed video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoInfo {
    /// 11-character YouTube video ID
    pub video_id: String,

    /// Video title
    pub title: String,

    /// Channel display name
    pub channel_title: String,

    /// View count at analysis time
    #[serde(default)]
    pub view_count: u64,

    /// Comment count at analysis time
    #[serde(default)]
    pub comment_count: u64,

    /// Publication timestamp, if known
    #[serde(default)]
    pub published_at: Option<String>,
}

/// A frequently used word across the analyzed comments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrequentWord {
    /// The word itself
    pub word: String,

    /// Occurrence count
    pub count: u64,

    /// Share of analyzed comments containing the word, 0-100
    pub percentage: f64,
}

/// A single comment surfaced by the analysis.
///
/// Used for viewer requests, viewer questions, and top comments alike.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentEntry {
    /// Comment text
    pub text: String,

    /// Like count
    pub like_count: u64,

    /// Author display name
    pub author: String,

    /// Publication timestamp, if known
    #[serde(default)]
    pub published_at: Option<String>,
}

/// Sentiment distribution over the analyzed comments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sentiment {
    /// Positive share, 0.0 to 1.0
    pub positive: f64,

    /// Neutral share, 0.0 to 1.0
    pub neutral: f64,

    /// Negative share, 0.0 to 1.0
    pub negative: f64,

    /// Number of comments the distribution was computed from
    #[serde(default)]
    pub total_analyzed: u64,
}

impl Sentiment {
    /// Whether the three shares sum to 1 within a 0.01 tolerance.
    pub fn is_normalized(&self) -> bool {
        let sum = self.positive + self.neutral + self.negative;
        (sum - 1.0).abs() <= 0.01
    }
}

/// Result of a comment analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentAnalyzeResponse {
    /// The analyzed video
    pub video_info: VideoInfo,

    /// Frequent words, ordered by descending frequency
    #[serde(default)]
    pub frequent_words: Vec<FrequentWord>,

    /// Comments asking for future content
    #[serde(default)]
    pub viewer_requests: Vec<CommentEntry>,

    /// Comments asking questions
    #[serde(default)]
    pub viewer_questions: Vec<CommentEntry>,

    /// Most-liked comments
    #[serde(default)]
    pub top_comments: Vec<CommentEntry>,

    /// Sentiment distribution; absent when too few comments were analyzed
    #[serde(default)]
    pub sentiment: Option<Sentiment>,

    /// Analysis timestamp as sent by the backend
    pub analyzed_at: String,
}

/// A stored comment analysis, as listed by the history endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentHistoryEntry {
    /// Entry identifier
    #[serde(default)]
    pub id: String,

    /// Analyzed video ID
    pub video_id: String,

    /// Analyzed video title
    #[serde(default)]
    pub video_title: String,

    /// Number of comments analyzed
    #[serde(default)]
    pub comment_count: u64,

    /// Analysis timestamp
    pub analyzed_at: String,
}
