//! Dependent YouTuber-ranking fetch.
//!
//! The coordinator is keyed off the most recently *submitted* search term,
//! not the live input value, and runs independently of the primary
//! orchestrators with its own lifecycle.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ErrorInfo, YouTuberRanking};

use super::state::AnalysisState;

/// Source of ranking data for a search term.
#[async_trait]
pub trait RankingSource: Send + Sync {
    async fn ranking(&self, term: &str) -> Result<Vec<YouTuberRanking>>;
}

/// Tracks the ranking query that follows a successful keyword submission.
pub struct RankingCoordinator<S: RankingSource> {
    source: S,
    state: Mutex<AnalysisState<Vec<YouTuberRanking>>>,
    seq: AtomicU64,
}

impl<S: RankingSource> RankingCoordinator<S> {
    /// Create an idle coordinator over the given source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Mutex::new(AnalysisState::Idle),
            seq: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AnalysisState<Vec<YouTuberRanking>> {
        self.state.lock().expect("state lock poisoned").clone()
    }

    /// React to a change of the submitted search term.
    ///
    /// An empty term resets to `Idle` without a request. Otherwise the
    /// coordinator goes `Pending` and fetches; a term change before the
    /// response arrives discards the stale response (last-write-wins).
    pub async fn set_term(&self, term: &str) {
        let token = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        let term = term.trim();
        if term.is_empty() {
            self.apply_if_current(token, AnalysisState::Idle);
            return;
        }

        self.apply_if_current(token, AnalysisState::Pending);
        let result = self.source.ranking(term).await;

        let next = match result {
            Ok(rankings) => AnalysisState::Success(rankings),
            Err(error) => AnalysisState::Error(ErrorInfo::from_app_error(&error)),
        };
        self.apply_if_current(token, next);
    }

    fn apply_if_current(&self, token: u64, next: AnalysisState<Vec<YouTuberRanking>>) {
        let mut state = self.state.lock().expect("state lock poisoned");
        if self.seq.load(Ordering::SeqCst) == token {
            *state = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    use super::*;
    use crate::error::AppError;
    use crate::models::ErrorKind;

    fn ranking_for(term: &str) -> Vec<YouTuberRanking> {
        vec![YouTuberRanking {
            rank: 1,
            channel_id: format!("UC_{term}"),
            channel_title: format!("{term} 채널"),
            thumbnail_url: String::new(),
            subscriber_count: 1000,
            total_views: 50000,
            video_count_for_keyword: 3,
            avg_views_per_video: 12000.0,
            top_video_title: format!("{term} 영상"),
            top_video_views: 30000,
        }]
    }

    /// Test source with per-term latency.
    #[derive(Default)]
    struct ScriptedSource {
        delays_ms: HashMap<String, u64>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RankingSource for ScriptedSource {
        async fn ranking(&self, term: &str) -> Result<Vec<YouTuberRanking>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let delay = self.delays_ms.get(term).copied().unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            if term == "boom" {
                return Err(AppError::status(503, "test"));
            }
            Ok(ranking_for(term))
        }
    }

    #[tokio::test]
    async fn test_empty_term_stays_idle_without_request() {
        let coordinator = RankingCoordinator::new(ScriptedSource::default());
        coordinator.set_term("   ").await;

        assert!(coordinator.state().is_idle());
        assert_eq!(coordinator.source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_term_change_fetches_ranking() {
        let coordinator = RankingCoordinator::new(ScriptedSource::default());
        coordinator.set_term("파이썬").await;

        let state = coordinator.state();
        let rankings = state.data().expect("should be success");
        assert_eq!(rankings[0].channel_id, "UC_파이썬");
    }

    #[tokio::test]
    async fn test_source_failure_classified() {
        let coordinator = RankingCoordinator::new(ScriptedSource::default());
        coordinator.set_term("boom").await;

        let state = coordinator.state();
        assert_eq!(state.error().map(|e| e.kind), Some(ErrorKind::ServerError));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_term_change_discards_stale_response() {
        let source = ScriptedSource {
            delays_ms: HashMap::from([("파이썬".to_string(), 50), ("자바".to_string(), 5)]),
            calls: AtomicUsize::new(0),
        };
        let coordinator = RankingCoordinator::new(source);

        tokio::join!(coordinator.set_term("파이썬"), coordinator.set_term("자바"));

        let state = coordinator.state();
        let rankings = state.data().expect("should be success");
        assert_eq!(rankings[0].channel_id, "UC_자바");
    }

    #[tokio::test(start_paused = true)]
    async fn test_clearing_term_discards_stale_response() {
        let source = ScriptedSource {
            delays_ms: HashMap::from([("파이썬".to_string(), 50)]),
            calls: AtomicUsize::new(0),
        };
        let coordinator = RankingCoordinator::new(source);

        tokio::join!(coordinator.set_term("파이썬"), coordinator.set_term(""));

        assert!(coordinator.state().is_idle());
        assert_eq!(coordinator.source.calls.load(Ordering::SeqCst), 1);
    }
}
