use calcutel_norms::ScoringEngine;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub engine: ScoringEngine,
}
