//! Analysis lifecycle state.

use crate::models::ErrorInfo;

/// Lifecycle of one analysis domain.
///
/// Exactly one variant is active at any time; transitions replace the
/// state wholesale. `Idle → Pending → Success | Error`, and any further
/// submission returns to `Pending`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisState<T> {
    /// Nothing submitted yet
    #[default]
    Idle,

    /// A request is in flight
    Pending,

    /// The most recent request succeeded
    Success(T),

    /// The most recent request failed, classified for display
    Error(ErrorInfo),
}

impl<T> AnalysisState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The successful payload, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    /// The classified error, if any.
    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            Self::Error(info) => Some(info),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ErrorKind;

    #[test]
    fn test_default_is_idle() {
        let state: AnalysisState<u32> = AnalysisState::default();
        assert!(state.is_idle());
        assert!(state.data().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_accessors_match_variant() {
        let success = AnalysisState::Success(42);
        assert!(success.is_success());
        assert_eq!(success.data(), Some(&42));

        let error: AnalysisState<u32> =
            AnalysisState::Error(ErrorInfo::from_kind(ErrorKind::Network));
        assert!(error.is_error());
        assert_eq!(error.error().map(|e| e.kind), Some(ErrorKind::Network));

        let pending: AnalysisState<u32> = AnalysisState::Pending;
        assert!(pending.is_pending());
        assert!(pending.data().is_none());
    }
}
