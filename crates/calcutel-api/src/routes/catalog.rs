use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use calcutel_norms::{AgeNormativeTable, ChronologicalAge, ScoringMethod, StandardizedTest};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct TestSummary {
    id: String,
    name: String,
    area: String,
    method: ScoringMethod,
}

impl From<&StandardizedTest> for TestSummary {
    fn from(test: &StandardizedTest) -> Self {
        Self {
            id: test.id.clone(),
            name: test.name.clone(),
            area: test.area.clone(),
            method: test.method,
        }
    }
}

/// Optional patient age. Both parts or neither; the listing is filtered
/// when both are given.
#[derive(Deserialize)]
pub struct AgeFilter {
    years: Option<i32>,
    months: Option<i32>,
}

#[derive(Deserialize)]
pub struct AgeParams {
    years: i32,
    months: i32,
}

pub async fn list_tests(
    State(state): State<AppState>,
    filter: Result<Query<AgeFilter>, QueryRejection>,
) -> Result<Json<Vec<TestSummary>>, ApiError> {
    let Query(filter) = filter?;
    let tests: Vec<TestSummary> = match (filter.years, filter.months) {
        (Some(years), Some(months)) => {
            let age = ChronologicalAge::new(years, months)?;
            state
                .engine
                .available_tests(age)
                .into_iter()
                .map(TestSummary::from)
                .collect()
        }
        (None, None) => state.engine.list_tests().iter().map(TestSummary::from).collect(),
        _ => {
            return Err(ApiError::BadRequest(
                "age filter needs both years and months".to_string(),
            ));
        }
    };
    Ok(Json(tests))
}

pub async fn get_test_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StandardizedTest>, ApiError> {
    let test = state.engine.get_test(&id)?;
    Ok(Json(test.clone()))
}

/// The baremo that applies to a patient of the given age.
pub async fn get_band(
    State(state): State<AppState>,
    Path(id): Path<String>,
    params: Result<Query<AgeParams>, QueryRejection>,
) -> Result<Json<AgeNormativeTable>, ApiError> {
    let Query(params) = params?;
    let age = ChronologicalAge::new(params.years, params.months)?;
    let table = state.engine.resolve_band(&id, age)?;
    Ok(Json(table.clone()))
}
