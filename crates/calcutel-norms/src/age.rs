use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{AgeNormativeTable, StandardizedTest};
use crate::error::ScoringError;

const MONTHS_PER_YEAR: u64 = 12;

/// One end of an age range, as printed in the normative manuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgeBound {
    pub years: u32,
    pub months: u32,
}

impl AgeBound {
    pub const fn new(years: u32, months: u32) -> Self {
        Self { years, months }
    }

    pub fn total_months(&self) -> u64 {
        u64::from(self.years) * MONTHS_PER_YEAR + u64::from(self.months)
    }
}

impl fmt::Display for AgeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y {}m", self.years, self.months)
    }
}

/// An inclusive age range. Both `from` and `to` belong to the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgeRange {
    pub from: AgeBound,
    pub to: AgeBound,
}

impl AgeRange {
    pub fn contains(&self, total_months: u64) -> bool {
        self.from.total_months() <= total_months && total_months <= self.to.total_months()
    }

    pub fn overlaps(&self, other: &AgeRange) -> bool {
        self.from.total_months() <= other.to.total_months()
            && other.from.total_months() <= self.to.total_months()
    }

    pub fn is_inverted(&self) -> bool {
        self.from.total_months() > self.to.total_months()
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.from, self.to)
    }
}

/// A patient's age at the time of testing.
///
/// Only constructible through [`ChronologicalAge::new`], so a value of this
/// type always has a month component in `[0, 11]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ChronologicalAge {
    years: u32,
    months: u32,
}

impl ChronologicalAge {
    pub fn new(years: i32, months: i32) -> Result<Self, ScoringError> {
        let years = u32::try_from(years).map_err(|_| {
            ScoringError::InvalidInput(format!("age years must be non-negative, got {years}"))
        })?;
        let months = u32::try_from(months)
            .ok()
            .filter(|m| *m < 12)
            .ok_or_else(|| {
                ScoringError::InvalidInput(format!("age months must be in [0, 11], got {months}"))
            })?;
        Ok(Self { years, months })
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn total_months(&self) -> u64 {
        u64::from(self.years) * MONTHS_PER_YEAR + u64::from(self.months)
    }
}

impl fmt::Display for ChronologicalAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y {}m", self.years, self.months)
    }
}

/// Select the normative table that applies to `age`.
///
/// Tables are scanned in catalog order and the first one whose range
/// contains the age wins, even when a later table also contains it.
pub fn resolve_band(
    test: &StandardizedTest,
    age: ChronologicalAge,
) -> Result<&AgeNormativeTable, ScoringError> {
    let total = age.total_months();
    let table = test
        .tables
        .iter()
        .find(|t| t.age_range.contains(total))
        .ok_or_else(|| ScoringError::NoBandFound {
            test_id: test.id.clone(),
            age,
        })?;

    tracing::debug!(
        test_id = %test.id,
        age_months = total,
        age_range = %table.age_range,
        "resolved age band"
    );
    Ok(table)
}
