use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::age::{self, AgeRange, ChronologicalAge};
use crate::catalog::{AgeNormativeTable, Catalog, ScoringMethod, StandardizedTest};
use crate::error::ScoringError;
use crate::quotient::{self, DualQuotientResult};
use crate::scoring::{self, ScoreBand};

/// One scoring call as submitted by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringRequest {
    pub test_id: String,
    pub age_years: i32,
    pub age_months: i32,
    /// The raw score; the receptive score for dual-score tests.
    pub score: i32,
    /// The expressive score. Only dual-score tests accept it.
    #[serde(default)]
    pub second_score: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum UnmatchedReason {
    /// No table of the test covers the patient's age.
    NoBandFound,
    /// The score falls outside every interval of the table for that age.
    OutOfRange { age_range: AgeRange },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringResult {
    Classified {
        band: ScoreBand,
        /// Display label of `band.interpretation`.
        label: String,
        age_range: AgeRange,
    },
    Quotient {
        result: DualQuotientResult,
    },
    Unmatched {
        reason: UnmatchedReason,
    },
}

/// Scores requests against an injected, read-only [`Catalog`].
///
/// Cloning is cheap and every clone shares the same catalog.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: Arc<Catalog>,
}

impl ScoringEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn list_tests(&self) -> &[StandardizedTest] {
        self.catalog.list_tests()
    }

    pub fn get_test(&self, id: &str) -> Result<&StandardizedTest, ScoringError> {
        self.catalog.get_test(id)
    }

    pub fn available_tests(&self, age: ChronologicalAge) -> Vec<&StandardizedTest> {
        self.catalog.available_tests(age)
    }

    pub fn resolve_band(
        &self,
        test_id: &str,
        age: ChronologicalAge,
    ) -> Result<&AgeNormativeTable, ScoringError> {
        age::resolve_band(self.get_test(test_id)?, age)
    }

    /// Run a full scoring request.
    ///
    /// Age and score misses come back as [`ScoringResult::Unmatched`];
    /// an unknown test or malformed input is an error.
    pub fn score(&self, req: &ScoringRequest) -> Result<ScoringResult, ScoringError> {
        let test = self.get_test(&req.test_id)?;
        let age = ChronologicalAge::new(req.age_years, req.age_months)?;

        let result = match test.method {
            ScoringMethod::Normative => {
                if req.second_score.is_some() {
                    return Err(ScoringError::InvalidInput(format!(
                        "test '{}' takes a single score",
                        test.id
                    )));
                }
                score_normative(test, age, req.score)
            }
            ScoringMethod::LanguageAgeQuotient => {
                let expressive = req.second_score.ok_or_else(|| {
                    ScoringError::InvalidInput(format!(
                        "test '{}' needs both a receptive and an expressive score",
                        test.id
                    ))
                })?;
                score_quotient(test, age, req.score, expressive)?
            }
        };

        tracing::debug!(
            test_id = %test.id,
            age = %age,
            score = req.score,
            ?result,
            "scored request"
        );
        Ok(result)
    }
}

fn score_normative(test: &StandardizedTest, age: ChronologicalAge, score: i32) -> ScoringResult {
    let Ok(table) = age::resolve_band(test, age) else {
        return ScoringResult::Unmatched {
            reason: UnmatchedReason::NoBandFound,
        };
    };

    match scoring::classify(table, score) {
        Ok(band) => ScoringResult::Classified {
            label: band.interpretation.label().to_string(),
            band: band.clone(),
            age_range: table.age_range,
        },
        Err(_) => ScoringResult::Unmatched {
            reason: UnmatchedReason::OutOfRange {
                age_range: table.age_range,
            },
        },
    }
}

fn score_quotient(
    test: &StandardizedTest,
    age: ChronologicalAge,
    receptive: i32,
    expressive: i32,
) -> Result<ScoringResult, ScoringError> {
    if age::resolve_band(test, age).is_err() {
        return Ok(ScoringResult::Unmatched {
            reason: UnmatchedReason::NoBandFound,
        });
    }

    let result =
        quotient::compute_dual_quotient(receptive, expressive, age.total_months() as f64)?;
    Ok(ScoringResult::Quotient { result })
}
