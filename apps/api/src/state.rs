use std::sync::Arc;

use crate::analysis::oracle::ScoringOracle;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable scoring oracle. Production: `LlmScoringOracle`; tests swap
    /// in a deterministic double through the same trait.
    pub oracle: Arc<dyn ScoringOracle>,
}
