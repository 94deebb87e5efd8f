// src/utils/url.rs

//! YouTube video URL validation and parsing.
//!
//! Accepts the three canonical video URL shapes:
//! - `https://www.youtube.com/watch?v=VIDEO_ID`
//! - `https://youtu.be/VIDEO_ID`
//! - `https://www.youtube.com/embed/VIDEO_ID`

use std::sync::OnceLock;

use regex::Regex;

/// The video ID is exactly 11 characters of `[A-Za-z0-9_-]`.
const VIDEO_ID: &str = "[A-Za-z0-9_-]{11}";

fn watch_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"^https?://(www\.)?youtube\.com/watch\?v=({VIDEO_ID})"
        ))
        .expect("watch pattern is valid")
    })
}

fn short_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"^https?://youtu\.be/({VIDEO_ID})"))
            .expect("short-link pattern is valid")
    })
}

fn embed_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"^https?://(www\.)?youtube\.com/embed/({VIDEO_ID})"
        ))
        .expect("embed pattern is valid")
    })
}

/// Check whether a string is a valid YouTube video URL.
///
/// Matching is a prefix test: trailing query parameters or fragments after
/// the video ID still validate.
///
/// # Examples
/// ```
/// use tubelens::utils::url::is_valid_video_url;
///
/// assert!(is_valid_video_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
/// assert!(is_valid_video_url("https://youtu.be/dQw4w9WgXcQ?t=42"));
/// assert!(!is_valid_video_url("https://vimeo.com/123"));
/// ```
pub fn is_valid_video_url(url: &str) -> bool {
    watch_pattern().is_match(url) || short_pattern().is_match(url) || embed_pattern().is_match(url)
}

/// Extract the 11-character video ID from a YouTube video URL.
///
/// Returns `None` for anything `is_valid_video_url` rejects. The shapes are
/// tried in watch → short-link → embed order.
pub fn extract_video_id(url: &str) -> Option<String> {
    if !is_valid_video_url(url) {
        return None;
    }

    for (pattern, group) in [
        (watch_pattern(), 2),
        (short_pattern(), 1),
        (embed_pattern(), 2),
    ] {
        if let Some(captures) = pattern.captures(url) {
            return captures.get(group).map(|m| m.as_str().to_string());
        }
    }

    None
}
