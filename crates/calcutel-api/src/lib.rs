//! calcutel-api
//!
//! HTTP surface over `calcutel-norms`. Read-only: every route answers from
//! the catalog held in [`state::AppState`].

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/tests", get(routes::catalog::list_tests))
        .route("/tests/{id}", get(routes::catalog::get_test_detail))
        .route("/tests/{id}/band", get(routes::catalog::get_band))
        .route("/score", post(routes::scoring::score))
        .route("/quotient", post(routes::scoring::quotient))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
