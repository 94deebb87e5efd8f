//! Service layer for the client core.
//!
//! This module contains the backend-facing logic for:
//! - Raw endpoint access (`ApiClient`)
//! - Keyword analysis (`KeywordService`)
//! - Comment analysis (`CommentService`)
//! - YouTuber rankings (`RankingService`)

mod client;
mod comments;
mod keywords;
mod rankings;

pub use client::ApiClient;
pub use comments::CommentService;
pub use keywords::KeywordService;
pub use rankings::RankingService;
