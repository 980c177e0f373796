//! Language-age quotient scoring (REEL family).
//!
//! The raw score of these instruments is already a linguistic age in months,
//! so no table lookup is involved: the result is derived from the ratio and
//! the gap between linguistic and chronological age.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScoringError;
use crate::scoring::Interpretation;

/// A gap of this many months or more between chronological and linguistic
/// age is a delay.
pub const DELAY_DIFFERENCE_MONTHS: f64 = 6.0;

/// A quotient at or below this value is a delay.
pub const DELAY_QUOTIENT: i64 = 85;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuotientResult {
    /// Months.
    pub linguistic_age: f64,
    pub quotient: i64,
    /// Chronological minus linguistic age, in months.
    pub difference: f64,
    pub interpretation: Interpretation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DualQuotientResult {
    pub receptive: QuotientResult,
    pub expressive: QuotientResult,
    /// Computed from the mean of the receptive and expressive raw scores.
    pub combined: QuotientResult,
}

pub fn compute_quotient(
    raw_score: f64,
    chronological_age_months: f64,
) -> Result<QuotientResult, ScoringError> {
    if !chronological_age_months.is_finite() || chronological_age_months <= 0.0 {
        return Err(ScoringError::InvalidInput(format!(
            "chronological age must be a positive number of months, got {chronological_age_months}"
        )));
    }
    if !raw_score.is_finite() || raw_score < 0.0 {
        return Err(ScoringError::InvalidInput(format!(
            "linguistic age must be a non-negative number of months, got {raw_score}"
        )));
    }

    let linguistic_age = raw_score;
    let quotient = (linguistic_age / chronological_age_months * 100.0).round() as i64;
    let difference = chronological_age_months - linguistic_age;
    let interpretation = if difference >= DELAY_DIFFERENCE_MONTHS || quotient <= DELAY_QUOTIENT {
        Interpretation::Delayed
    } else {
        Interpretation::Normal
    };

    Ok(QuotientResult {
        linguistic_age,
        quotient,
        difference,
        interpretation,
    })
}

/// Score a receptive/expressive pair plus their combined mean.
///
/// The combined linguistic age is the unrounded mean of the two raw scores;
/// rounding only happens when the quotient is taken.
pub fn compute_dual_quotient(
    receptive: i32,
    expressive: i32,
    chronological_age_months: f64,
) -> Result<DualQuotientResult, ScoringError> {
    let receptive = f64::from(receptive);
    let expressive = f64::from(expressive);
    let combined = (receptive + expressive) / 2.0;

    Ok(DualQuotientResult {
        receptive: compute_quotient(receptive, chronological_age_months)?,
        expressive: compute_quotient(expressive, chronological_age_months)?,
        combined: compute_quotient(combined, chronological_age_months)?,
    })
}
