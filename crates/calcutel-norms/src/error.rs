use thiserror::Error;

use crate::age::{AgeRange, ChronologicalAge};

/// Every way a scoring call can fail to produce a classification.
///
/// None of these are fatal: callers are expected to match on the variant and
/// present a specific message for each.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("unknown test: {0}")]
    UnknownTest(String),

    #[error("no age band of test '{test_id}' covers {age}")]
    NoBandFound {
        test_id: String,
        age: ChronologicalAge,
    },

    #[error("score {score} is outside every interval of the {age_range} table")]
    OutOfRange { score: i32, age_range: AgeRange },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ScoringError {
    /// Stable snake_case name of the variant, for callers that branch on
    /// the failure cause without parsing the message.
    pub fn kind(&self) -> &'static str {
        match self {
            ScoringError::UnknownTest(_) => "unknown_test",
            ScoringError::NoBandFound { .. } => "no_band_found",
            ScoringError::OutOfRange { .. } => "out_of_range",
            ScoringError::InvalidInput(_) => "invalid_input",
        }
    }
}

/// Structural problems that prevent a catalog from being built.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("test id must not be empty")]
    EmptyTestId,

    #[error("duplicate test id: {0}")]
    DuplicateTest(String),

    #[error("test '{test_id}': month component {months} is outside [0, 11]")]
    InvalidMonth { test_id: String, months: u32 },

    #[error("test '{test_id}': age range {age_range} starts after it ends")]
    InvertedAgeRange { test_id: String, age_range: AgeRange },
}
