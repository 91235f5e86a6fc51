use std::sync::Arc;

use crate::config::Config;
use crate::matching::scorer::MatchScorer;
use crate::store::MatchStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scorer. Default: WeightedMatchScorer.
    pub scorer: Arc<dyn MatchScorer>,
    /// Pluggable persistence. Default: PgMatchStore.
    pub store: Arc<dyn MatchStore>,
}
