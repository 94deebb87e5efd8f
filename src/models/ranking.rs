//! YouTuber ranking data structure.

use serde::{Deserialize, Serialize};

/// One channel in a keyword's YouTuber ranking.
///
/// The backend returns these rank-ascending; each rank is unique within
/// a response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YouTuberRanking {
    /// Position in the ranking, starting at 1
    pub rank: u32,

    /// Channel ID
    pub channel_id: String,

    /// Channel display name
    pub channel_title: String,

    /// Channel thumbnail URL
    #[serde(default)]
    pub thumbnail_url: String,

    /// Subscriber count
    #[serde(default)]
    pub subscriber_count: u64,

    /// Total channel views
    #[serde(default)]
    pub total_views: u64,

    /// Number of the channel's videos matching the keyword
    #[serde(default)]
    pub video_count_for_keyword: u32,

    /// Average views per matching video
    #[serde(default)]
    pub avg_views_per_video: f64,

    /// Title of the channel's most viewed matching video
    #[serde(default)]
    pub top_video_title: String,

    /// View count of that video
    #[serde(default)]
    pub top_video_views: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_decodes_backend_fixture() {
        let json = r#"[
            {
                "rank": 1,
                "channel_id": "UC123",
                "channel_title": "코딩 채널",
                "thumbnail_url": "https://example.com/thumb.jpg",
                "subscriber_count": 120000,
                "total_views": 45000000,
                "video_count_for_keyword": 12,
                "avg_views_per_video": 83000.5,
                "top_video_title": "파이썬 입문",
                "top_video_views": 900000
            },
            {
                "rank": 2,
                "channel_id": "UC456",
                "channel_title": "개발 일기",
                "subscriber_count": 54000,
                "avg_views_per_video": 21000,
                "top_video_views": 150000
            }
        ]"#;

        let rankings: Vec<YouTuberRanking> = serde_json::from_str(json).unwrap();
        assert_eq!(rankings.len(), 2);
        assert_eq!(rankings[0].rank, 1);
        assert_eq!(rankings[0].channel_title, "코딩 채널");
        assert_eq!(rankings[1].avg_views_per_video, 21000.0);
        assert!(rankings[1].thumbnail_url.is_empty());
    }
}
