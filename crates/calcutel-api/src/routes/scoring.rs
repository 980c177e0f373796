use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use calcutel_norms::quotient::compute_dual_quotient;
use calcutel_norms::{DualQuotientResult, ScoringRequest, ScoringResult};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct QuotientRequest {
    pub receptive: i32,
    pub expressive: i32,
    pub chronological_age_months: f64,
}

/// Score a request. Age and score misses are a 200 with an `unmatched` body.
pub async fn score(
    State(state): State<AppState>,
    req: Result<Json<ScoringRequest>, JsonRejection>,
) -> Result<Json<ScoringResult>, ApiError> {
    let Json(req) = req?;
    let result = state.engine.score(&req)?;
    Ok(Json(result))
}

/// Language-age quotients for a chronological age already in months.
pub async fn quotient(
    req: Result<Json<QuotientRequest>, JsonRejection>,
) -> Result<Json<DualQuotientResult>, ApiError> {
    let Json(req) = req?;
    let result =
        compute_dual_quotient(req.receptive, req.expressive, req.chronological_age_months)?;
    Ok(Json(result))
}
