mod common;

use calcutel_norms::age::resolve_band;
use calcutel_norms::{ChronologicalAge, Interpretation, ScoringError};

use common::{age, overlapping_test, preschool_test, reel_like_test};

#[test]
fn total_months_combines_years_and_months() {
    assert_eq!(age(0, 0).total_months(), 0);
    assert_eq!(age(3, 0).total_months(), 36);
    assert_eq!(age(6, 11).total_months(), 83);
}

#[test]
fn rejects_months_outside_year() {
    assert!(matches!(
        ChronologicalAge::new(4, 12),
        Err(ScoringError::InvalidInput(_))
    ));
    assert!(matches!(
        ChronologicalAge::new(4, -1),
        Err(ScoringError::InvalidInput(_))
    ));
}

#[test]
fn rejects_negative_years() {
    assert!(matches!(
        ChronologicalAge::new(-1, 3),
        Err(ScoringError::InvalidInput(_))
    ));
}

#[test]
fn both_age_bounds_are_inclusive() {
    let test = preschool_test();
    assert!(resolve_band(&test, age(3, 0)).is_ok());
    assert!(resolve_band(&test, age(6, 11)).is_ok());
}

#[test]
fn ages_just_outside_bounds_do_not_match() {
    let test = preschool_test();
    assert!(resolve_band(&test, age(2, 11)).is_err());
    assert!(resolve_band(&test, age(7, 0)).is_err());
}

#[test]
fn age_not_covered_is_no_band_found() {
    let test = preschool_test();
    let err = resolve_band(&test, age(10, 0)).unwrap_err();
    assert_eq!(
        err,
        ScoringError::NoBandFound {
            test_id: "preschool".to_string(),
            age: age(10, 0),
        }
    );
}

#[test]
fn newborn_age_resolves_without_underflow() {
    let test = reel_like_test();
    let table = resolve_band(&test, age(0, 0)).unwrap();
    assert_eq!(table.age_range.from.total_months(), 0);
}

#[test]
fn overlapping_tables_resolve_to_first_listed() {
    let test = overlapping_test();

    // 4y6m..5y0m is covered by both tables.
    let table = resolve_band(&test, age(4, 8)).unwrap();
    assert_eq!(table.bands[0].interpretation, Interpretation::Risk);

    let table = resolve_band(&test, age(5, 1)).unwrap();
    assert_eq!(table.bands[0].interpretation, Interpretation::Normal);
}

#[test]
fn age_display_is_years_and_months() {
    assert_eq!(age(5, 3).to_string(), "5y 3m");
    let test = preschool_test();
    assert_eq!(test.tables[0].age_range.to_string(), "3y 0m - 6y 11m");
}
