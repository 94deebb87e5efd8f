//! Submit → result orchestration for one analysis domain.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ErrorInfo;

use super::state::AnalysisState;

/// Backend seam for one analysis domain.
///
/// `validate` runs synchronously before any request is issued; `fetch`
/// performs exactly one outbound request.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    type Input: Send + Sync;
    type Output: Send;

    /// Check the input locally. A failure here must not reach the network.
    fn validate(&self, input: &Self::Input) -> std::result::Result<(), ErrorInfo>;

    /// Issue the outbound request.
    async fn fetch(&self, input: &Self::Input) -> Result<Self::Output>;
}

/// Orchestrates the submit lifecycle for one analysis domain.
///
/// Owns its state exclusively. Concurrent submissions are permitted while
/// a request is in flight; only the most recently issued request may apply
/// its response (last-write-wins), tracked by a monotonic sequence token.
pub struct AnalysisOrchestrator<B: AnalysisBackend> {
    backend: B,
    state: Mutex<AnalysisState<B::Output>>,
    seq: AtomicU64,
}

impl<B: AnalysisBackend> AnalysisOrchestrator<B> {
    /// Create an idle orchestrator over the given backend.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: Mutex::new(AnalysisState::Idle),
            seq: AtomicU64::new(0),
        }
    }

    /// The backend this orchestrator submits to.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AnalysisState<B::Output>
    where
        B::Output: Clone,
    {
        self.state.lock().expect("state lock poisoned").clone()
    }

    /// Submit an input for analysis.
    ///
    /// Invalid input transitions straight to `Error` without a network
    /// call; valid input transitions to `Pending` and issues exactly one
    /// request. Either way the submission supersedes any in-flight
    /// request, whose response will be discarded on arrival.
    pub async fn submit(&self, input: B::Input) {
        let token = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        if let Err(info) = self.backend.validate(&input) {
            self.apply_if_current(token, AnalysisState::Error(info));
            return;
        }

        self.apply_if_current(token, AnalysisState::Pending);
        let result = self.backend.fetch(&input).await;

        let next = match result {
            Ok(data) => AnalysisState::Success(data),
            Err(error) => AnalysisState::Error(ErrorInfo::from_app_error(&error)),
        };
        self.apply_if_current(token, next);
    }

    /// Apply a transition unless a newer submission has been issued.
    fn apply_if_current(&self, token: u64, next: AnalysisState<B::Output>) {
        let mut state = self.state.lock().expect("state lock poisoned");
        if self.seq.load(Ordering::SeqCst) == token {
            *state = next;
        }
    }
}
