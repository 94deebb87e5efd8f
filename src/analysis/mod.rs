//! Request orchestration for the analysis domains.
//!
//! - `AnalysisState`: the idle/pending/success/error lifecycle
//! - `AnalysisOrchestrator`: validate → request → apply, last-write-wins
//! - `RankingCoordinator`: dependent YouTuber-ranking fetch keyed off the
//!   most recently submitted search term

mod orchestrator;
mod ranking;
mod state;

pub use orchestrator::{AnalysisBackend, AnalysisOrchestrator};
pub use ranking::{RankingCoordinator, RankingSource};
pub use state::AnalysisState;
