use calcutel_norms::quotient::{compute_dual_quotient, compute_quotient};
use calcutel_norms::{Interpretation, ScoringError};

#[test]
fn six_month_gap_is_delayed() {
    let result = compute_quotient(18.0, 24.0).unwrap();
    assert_eq!(result.linguistic_age, 18.0);
    assert_eq!(result.quotient, 75);
    assert_eq!(result.difference, 6.0);
    assert_eq!(result.interpretation, Interpretation::Delayed);
}

#[test]
fn low_quotient_is_delayed_even_with_small_gap() {
    // 10 / 12 = 83%, only 2 months behind.
    let result = compute_quotient(10.0, 12.0).unwrap();
    assert_eq!(result.quotient, 83);
    assert_eq!(result.difference, 2.0);
    assert_eq!(result.interpretation, Interpretation::Delayed);
}

#[test]
fn quotient_of_86_with_small_gap_is_normal() {
    // 31 / 36 = 86.1%, 5 months behind.
    let result = compute_quotient(31.0, 36.0).unwrap();
    assert_eq!(result.quotient, 86);
    assert_eq!(result.difference, 5.0);
    assert_eq!(result.interpretation, Interpretation::Normal);
}

#[test]
fn linguistic_age_ahead_of_chronological_is_normal() {
    let result = compute_quotient(30.0, 24.0).unwrap();
    assert_eq!(result.quotient, 125);
    assert_eq!(result.difference, -6.0);
    assert_eq!(result.interpretation, Interpretation::Normal);
}

#[test]
fn combined_score_uses_mean_of_raw_scores() {
    let result = compute_dual_quotient(20, 18, 24.0).unwrap();

    assert_eq!(result.receptive.quotient, 83);
    assert_eq!(result.expressive.quotient, 75);

    assert_eq!(result.combined.linguistic_age, 19.0);
    assert_eq!(result.combined.quotient, 79);
    assert_eq!(result.combined.difference, 5.0);
    assert_eq!(result.combined.interpretation, Interpretation::Delayed);
}

#[test]
fn combined_mean_keeps_half_months() {
    let result = compute_dual_quotient(20, 17, 24.0).unwrap();
    assert_eq!(result.combined.linguistic_age, 18.5);
    assert_eq!(result.combined.difference, 5.5);
    // 18.5 / 24 = 77.08%
    assert_eq!(result.combined.quotient, 77);
}

#[test]
fn zero_chronological_age_is_invalid() {
    assert!(matches!(
        compute_quotient(12.0, 0.0),
        Err(ScoringError::InvalidInput(_))
    ));
    assert!(matches!(
        compute_quotient(12.0, -3.0),
        Err(ScoringError::InvalidInput(_))
    ));
    assert!(matches!(
        compute_dual_quotient(12, 12, 0.0),
        Err(ScoringError::InvalidInput(_))
    ));
}

#[test]
fn negative_raw_score_is_invalid() {
    assert!(matches!(
        compute_dual_quotient(-1, 12, 24.0),
        Err(ScoringError::InvalidInput(_))
    ));
}
