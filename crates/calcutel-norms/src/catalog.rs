use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::age::{self, AgeRange, ChronologicalAge};
use crate::error::{CatalogError, ScoringError};
use crate::instruments;
use crate::scoring::ScoreBand;

/// How raw scores of a test are turned into an interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringMethod {
    /// Look the score up in the age-banded baremo tables.
    #[default]
    Normative,
    /// Receptive and expressive raw scores are linguistic ages in months;
    /// see [`crate::quotient`].
    LanguageAgeQuotient,
}

/// The baremo for one age range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgeNormativeTable {
    pub age_range: AgeRange,
    pub bands: Vec<ScoreBand>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StandardizedTest {
    pub id: String,
    pub name: String,
    /// Clinical area, e.g. "Comprensión".
    pub area: String,
    #[serde(default)]
    pub method: ScoringMethod,
    pub tables: Vec<AgeNormativeTable>,
}

impl StandardizedTest {
    /// Whether any of this test's tables covers `age`.
    pub fn covers(&self, age: ChronologicalAge) -> bool {
        age::resolve_band(self, age).is_ok()
    }
}

/// Data-quality findings that do not stop a catalog from loading.
///
/// Lookups keep their first-match semantics regardless; these exist so the
/// reference data can be reviewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum CatalogAnomaly {
    #[error("test '{test_id}', table {age_range}: interval [{min}, {max}] can never match")]
    InvertedScoreBand {
        test_id: String,
        age_range: AgeRange,
        min: i32,
        max: i32,
    },

    #[error(
        "test '{test_id}', table {age_range}: intervals '{first}' and '{second}' overlap"
    )]
    OverlappingScoreBands {
        test_id: String,
        age_range: AgeRange,
        first: String,
        second: String,
    },

    #[error("test '{test_id}': age ranges {first} and {second} overlap")]
    OverlappingAgeRanges {
        test_id: String,
        first: AgeRange,
        second: AgeRange,
    },

    #[error("test '{test_id}': no table covers the ages between {before} and {after}")]
    AgeGap {
        test_id: String,
        before: AgeRange,
        after: AgeRange,
    },
}

#[derive(Deserialize)]
struct CatalogDocument {
    tests: Vec<StandardizedTest>,
}

/// The immutable set of standardized tests the engine scores against.
///
/// Built once and shared by reference (usually behind an `Arc`).
#[derive(Debug, Clone)]
pub struct Catalog {
    tests: Vec<StandardizedTest>,
    anomalies: Vec<CatalogAnomaly>,
}

impl Catalog {
    pub fn new(tests: Vec<StandardizedTest>) -> Result<Self, CatalogError> {
        validate(&tests)?;
        let anomalies = find_anomalies(&tests);
        for anomaly in &anomalies {
            tracing::warn!(%anomaly, "normative catalog anomaly");
        }
        tracing::debug!(
            tests = tests.len(),
            anomalies = anomalies.len(),
            "normative catalog loaded"
        );
        Ok(Self { tests, anomalies })
    }

    /// The reference dataset shipped with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(instruments::all_tests())
    }

    /// Parse a `{"tests": [...]}` document and validate it.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::new(doc.tests)
    }

    pub fn list_tests(&self) -> &[StandardizedTest] {
        &self.tests
    }

    pub fn get_test(&self, id: &str) -> Result<&StandardizedTest, ScoringError> {
        self.tests
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| ScoringError::UnknownTest(id.to_string()))
    }

    /// Tests with at least one table covering `age`, in catalog order.
    pub fn available_tests(&self, age: ChronologicalAge) -> Vec<&StandardizedTest> {
        self.tests.iter().filter(|t| t.covers(age)).collect()
    }

    pub fn anomalies(&self) -> &[CatalogAnomaly] {
        &self.anomalies
    }
}

fn validate(tests: &[StandardizedTest]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for test in tests {
        if test.id.is_empty() {
            return Err(CatalogError::EmptyTestId);
        }
        if !seen.insert(test.id.as_str()) {
            return Err(CatalogError::DuplicateTest(test.id.clone()));
        }
        for table in &test.tables {
            let range = table.age_range;
            for bound in [range.from, range.to] {
                if bound.months > 11 {
                    return Err(CatalogError::InvalidMonth {
                        test_id: test.id.clone(),
                        months: bound.months,
                    });
                }
            }
            if range.is_inverted() {
                return Err(CatalogError::InvertedAgeRange {
                    test_id: test.id.clone(),
                    age_range: range,
                });
            }
        }
    }
    Ok(())
}

fn find_anomalies(tests: &[StandardizedTest]) -> Vec<CatalogAnomaly> {
    let mut anomalies = Vec::new();
    for test in tests {
        for table in &test.tables {
            for band in table.bands.iter().filter(|b| b.is_inverted()) {
                anomalies.push(CatalogAnomaly::InvertedScoreBand {
                    test_id: test.id.clone(),
                    age_range: table.age_range,
                    min: band.min,
                    max: band.max,
                });
            }

            let live: Vec<&ScoreBand> = table.bands.iter().filter(|b| !b.is_inverted()).collect();
            for (i, a) in live.iter().enumerate() {
                for b in &live[i + 1..] {
                    if a.overlaps(b) {
                        anomalies.push(CatalogAnomaly::OverlappingScoreBands {
                            test_id: test.id.clone(),
                            age_range: table.age_range,
                            first: a.range_label.clone(),
                            second: b.range_label.clone(),
                        });
                    }
                }
            }
        }

        for (i, a) in test.tables.iter().enumerate() {
            for b in &test.tables[i + 1..] {
                if a.age_range.overlaps(&b.age_range) {
                    anomalies.push(CatalogAnomaly::OverlappingAgeRanges {
                        test_id: test.id.clone(),
                        first: a.age_range,
                        second: b.age_range,
                    });
                }
            }
        }

        for pair in test.tables.windows(2) {
            let (before, after) = (pair[0].age_range, pair[1].age_range);
            if after.from.total_months() > before.to.total_months() + 1 {
                anomalies.push(CatalogAnomaly::AgeGap {
                    test_id: test.id.clone(),
                    before,
                    after,
                });
            }
        }
    }
    anomalies
}
