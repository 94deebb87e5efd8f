// src/utils/time.rs

//! Timestamp rendering helpers.

use chrono::{DateTime, Local, NaiveDateTime};

/// Render a backend timestamp in local time as `YYYY-MM-DD HH:MM:SS`.
///
/// The backend sends either RFC 3339 strings or naive
/// `YYYY-MM-DDTHH:MM:SS[.ffffff]` strings. Anything unparseable is
/// returned unchanged so the caller always has something to display.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
    }

    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%Y-%m-%d %H:%M:%S").to_string();
    }

    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_timestamp_formats() {
        assert_eq!(
            format_timestamp("2026-01-17T12:00:00"),
            "2026-01-17 12:00:00"
        );
        assert_eq!(
            format_timestamp("2026-01-17T12:00:00.123456"),
            "2026-01-17 12:00:00"
        );
    }

    #[test]
    fn test_rfc3339_timestamp_parses() {
        // Local-time rendering depends on the host timezone, so only check
        // that parsing succeeded and produced the expected shape.
        let rendered = format_timestamp("2026-01-17T12:00:00Z");
        assert_eq!(rendered.len(), 19);
        assert!(rendered.starts_with("2026-01-1"));
    }

    #[test]
    fn test_unparseable_returns_raw() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp(""), "");
    }
}
