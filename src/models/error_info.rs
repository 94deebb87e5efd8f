//! User-facing error classification.
//!
//! Maps the closed set of failure categories to title/message/suggestion
//! triples the presentation layer can render directly. Raw transport or
//! backend errors are always normalized through here before display.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Closed set of failure categories surfaced to the user.
///
/// `Validation` is produced only by local input validation and never by
/// network-failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Network,
    QuotaExceeded,
    InvalidApiKey,
    VideoNotFound,
    CommentsDisabled,
    ServerError,
    Validation,
    Unknown,
}

/// One catalog entry of fixed user-facing strings.
#[derive(Clone, Copy)]
struct CatalogEntry {
    title: &'static str,
    message: &'static str,
    suggestion: Option<&'static str>,
}

impl ErrorKind {
    /// Parse a backend-provided kind tag.
    ///
    /// Unrecognized tags fall back to `Unknown` rather than failing.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "network" => Self::Network,
            "quota_exceeded" => Self::QuotaExceeded,
            "invalid_api_key" => Self::InvalidApiKey,
            "video_not_found" => Self::VideoNotFound,
            "comments_disabled" => Self::CommentsDisabled,
            "server_error" => Self::ServerError,
            "validation" => Self::Validation,
            _ => Self::Unknown,
        }
    }

    fn catalog(self) -> CatalogEntry {
        match self {
            Self::Network => CatalogEntry {
                title: "네트워크 오류",
                message: "서버에 연결할 수 없습니다.",
                suggestion: Some("인터넷 연결을 확인하고 다시 시도해주세요."),
            },
            Self::QuotaExceeded => CatalogEntry {
                title: "API 할당량 초과",
                message: "YouTube API 일일 할당량이 초과되었습니다.",
                suggestion: Some("내일 다시 시도하거나 API 키를 확인해주세요."),
            },
            Self::InvalidApiKey => CatalogEntry {
                title: "API 키 오류",
                message: "YouTube API 키가 유효하지 않습니다.",
                suggestion: Some("설정에서 API 키를 확인해주세요."),
            },
            Self::VideoNotFound => CatalogEntry {
                title: "영상을 찾을 수 없음",
                message: "요청한 YouTube 영상을 찾을 수 없습니다.",
                suggestion: Some("URL이 올바른지 확인해주세요."),
            },
            Self::CommentsDisabled => CatalogEntry {
                title: "댓글 비활성화",
                message: "이 영상은 댓글이 비활성화되어 있습니다.",
                suggestion: Some("다른 영상을 분석해보세요."),
            },
            Self::ServerError => CatalogEntry {
                title: "서버 오류",
                message: "서버에서 오류가 발생했습니다.",
                suggestion: Some("잠시 후 다시 시도해주세요."),
            },
            Self::Validation => CatalogEntry {
                title: "입력 오류",
                message: "입력값이 올바르지 않습니다.",
                suggestion: Some("입력값을 확인하고 다시 시도해주세요."),
            },
            Self::Unknown => CatalogEntry {
                title: "알 수 없는 오류",
                message: "예상치 못한 오류가 발생했습니다.",
                suggestion: Some("문제가 계속되면 관리자에게 문의해주세요."),
            },
        }
    }
}

/// A classified, renderable error.
///
/// Immutable once constructed; a new state replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Failure category
    pub kind: ErrorKind,

    /// Short title
    pub title: String,

    /// Main message
    pub message: String,

    /// Optional recovery hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorInfo {
    /// Look up the catalog entry for a kind.
    pub fn from_kind(kind: ErrorKind) -> Self {
        let entry = kind.catalog();
        Self {
            kind,
            title: entry.title.to_string(),
            message: entry.message.to_string(),
            suggestion: entry.suggestion.map(str::to_string),
        }
    }

    /// Catalog entry with the message replaced by caller-supplied text.
    ///
    /// Explicit values take priority over catalog defaults; the title and
    /// suggestion stay catalog-derived.
    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::from_kind(kind)
        }
    }

    /// A local validation failure with a domain-specific message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Validation, message)
    }

    /// Normalize a transport/backend failure into a renderable error.
    ///
    /// Transport failures map to `Network`, non-2xx statuses map by code,
    /// and decoded failure envelopes are classified from the backend's
    /// message text. Unmapped failures fall back to `Unknown`.
    pub fn from_app_error(error: &AppError) -> Self {
        match error {
            AppError::Http(e) => {
                if e.is_decode() {
                    Self::from_kind(ErrorKind::Unknown)
                } else {
                    // Timeouts, connection refusals, DNS failures
                    Self::from_kind(ErrorKind::Network)
                }
            }
            AppError::Status { status, .. } => Self::from_kind(classify_status(*status)),
            AppError::Backend(message) => {
                Self::with_message(classify_backend_message(message), message.clone())
            }
            _ => Self::from_kind(ErrorKind::Unknown),
        }
    }
}

/// Map an HTTP status code to a failure category.
fn classify_status(status: u16) -> ErrorKind {
    match status {
        401 | 403 => ErrorKind::InvalidApiKey,
        404 => ErrorKind::VideoNotFound,
        429 => ErrorKind::QuotaExceeded,
        500..=599 => ErrorKind::ServerError,
        _ => ErrorKind::Unknown,
    }
}

/// Classify a backend failure message by its content.
fn classify_backend_message(message: &str) -> ErrorKind {
    let lower = message.to_lowercase();

    if lower.contains("quota") {
        return ErrorKind::QuotaExceeded;
    }
    if lower.contains("api key") || lower.contains("apikey") {
        return ErrorKind::InvalidApiKey;
    }
    if lower.contains("video") && lower.contains("not found") {
        return ErrorKind::VideoNotFound;
    }
    if lower.contains("comments") && lower.contains("disabled") {
        return ErrorKind::CommentsDisabled;
    }
    if lower.contains("network") || lower.contains("timeout") || lower.contains("timed out") {
        return ErrorKind::Network;
    }

    ErrorKind::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_parses_known_tags() {
        assert_eq!(ErrorKind::from_code("network"), ErrorKind::Network);
        assert_eq!(
            ErrorKind::from_code("quota_exceeded"),
            ErrorKind::QuotaExceeded
        );
        assert_eq!(
            ErrorKind::from_code("comments_disabled"),
            ErrorKind::CommentsDisabled
        );
    }

    #[test]
    fn from_code_falls_back_to_unknown() {
        assert_eq!(ErrorKind::from_code("totally_new_kind"), ErrorKind::Unknown);
        assert_eq!(ErrorKind::from_code(""), ErrorKind::Unknown);
    }

    #[test]
    fn catalog_supplies_full_triple() {
        let info = ErrorInfo::from_kind(ErrorKind::QuotaExceeded);
        assert_eq!(info.title, "API 할당량 초과");
        assert_eq!(info.message, "YouTube API 일일 할당량이 초과되었습니다.");
        assert!(info.suggestion.is_some());
    }

    #[test]
    fn custom_message_wins_over_catalog() {
        let info = ErrorInfo::with_message(ErrorKind::ServerError, "점검 중입니다.");
        assert_eq!(info.kind, ErrorKind::ServerError);
        assert_eq!(info.message, "점검 중입니다.");
        // Title and suggestion stay catalog-derived
        assert_eq!(info.title, "서버 오류");
        assert_eq!(
            info.suggestion.as_deref(),
            Some("잠시 후 다시 시도해주세요.")
        );
    }

    #[test]
    fn status_codes_classify_by_table() {
        assert_eq!(classify_status(401), ErrorKind::InvalidApiKey);
        assert_eq!(classify_status(404), ErrorKind::VideoNotFound);
        assert_eq!(classify_status(429), ErrorKind::QuotaExceeded);
        assert_eq!(classify_status(500), ErrorKind::ServerError);
        assert_eq!(classify_status(503), ErrorKind::ServerError);
        assert_eq!(classify_status(418), ErrorKind::Unknown);
    }

    #[test]
    fn backend_messages_classify_by_content() {
        assert_eq!(
            classify_backend_message("YouTube API quota exceeded. Please try again later."),
            ErrorKind::QuotaExceeded
        );
        assert_eq!(
            classify_backend_message("Invalid API key provided"),
            ErrorKind::InvalidApiKey
        );
        assert_eq!(
            classify_backend_message("Video not found: abc123"),
            ErrorKind::VideoNotFound
        );
        assert_eq!(
            classify_backend_message("Comments are disabled for this video"),
            ErrorKind::CommentsDisabled
        );
        assert_eq!(
            classify_backend_message("something inexplicable"),
            ErrorKind::Unknown
        );
    }

    #[test]
    fn backend_envelope_error_keeps_backend_message() {
        let error = AppError::backend("YouTube API quota exceeded. Please try again later.");
        let info = ErrorInfo::from_app_error(&error);
        assert_eq!(info.kind, ErrorKind::QuotaExceeded);
        assert_eq!(
            info.message,
            "YouTube API quota exceeded. Please try again later."
        );
    }

    #[test]
    fn status_error_uses_catalog_message() {
        let error = AppError::status(500, "v1/keywords/analyze");
        let info = ErrorInfo::from_app_error(&error);
        assert_eq!(info.kind, ErrorKind::ServerError);
        assert_eq!(info.message, "서버에서 오류가 발생했습니다.");
    }

    #[test]
    fn kind_serializes_as_snake_case() {
        let json = serde_json::to_string(&ErrorKind::QuotaExceeded).unwrap();
        assert_eq!(json, r#""quota_exceeded""#);
    }
}
