mod common;

use calcutel_norms::age::resolve_band;
use calcutel_norms::scoring::classify;
use calcutel_norms::{Interpretation, ScoringError};

use common::{age, gapped_test, preschool_test};

#[test]
fn score_interval_bounds_are_inclusive() {
    let test = preschool_test();
    let table = &test.tables[0];

    assert_eq!(classify(table, 41).unwrap().interpretation, Interpretation::Normal);
    assert_eq!(classify(table, 60).unwrap().interpretation, Interpretation::Normal);
    assert_eq!(classify(table, 40).unwrap().interpretation, Interpretation::Risk);
    assert_eq!(classify(table, 21).unwrap().interpretation, Interpretation::Risk);
    assert_eq!(classify(table, 20).unwrap().interpretation, Interpretation::Deficit);
    assert_eq!(classify(table, 0).unwrap().interpretation, Interpretation::Deficit);
}

#[test]
fn score_above_every_interval_is_out_of_range() {
    let test = preschool_test();
    let table = resolve_band(&test, age(4, 0)).unwrap();

    let err = classify(table, 75).unwrap_err();
    assert_eq!(
        err,
        ScoringError::OutOfRange {
            score: 75,
            age_range: table.age_range,
        }
    );
    assert!(classify(table, 61).is_err());
}

#[test]
fn negative_score_is_out_of_range() {
    let test = preschool_test();
    assert!(matches!(
        classify(&test.tables[0], -1),
        Err(ScoringError::OutOfRange { score: -1, .. })
    ));
}

#[test]
fn score_in_gap_is_out_of_range() {
    let test = gapped_test();
    let table = &test.tables[0];

    assert!(classify(table, 10).is_ok());
    for score in 11..20 {
        assert!(classify(table, score).is_err(), "score {score} should be unmatched");
    }
    assert!(classify(table, 20).is_ok());
}

#[test]
fn classification_returns_stored_labels() {
    let test = preschool_test();
    let band = classify(&test.tables[0], 30).unwrap();
    assert_eq!(band.ds, "21-40");
    assert_eq!(band.range_label, "21-40");
    assert_eq!(band.interpretation.label(), "Riesgo");
}

#[test]
fn interpretation_labels_match_manuals() {
    assert_eq!(Interpretation::NormalSlow.label(), "Normal Lento");
    assert_eq!(Interpretation::Deficit.to_string(), "Déficit");
    assert_eq!(Interpretation::Delayed.label(), "Retraso o Dificultad");
    assert_eq!(Interpretation::StructureIII.label(), "Estructura III");
}

#[test]
fn interpretation_serializes_as_snake_case() {
    let json = serde_json::to_string(&Interpretation::NormalSlow).unwrap();
    assert_eq!(json, "\"normal_slow\"");
    let back: Interpretation = serde_json::from_str("\"within_normal_limits\"").unwrap();
    assert_eq!(back, Interpretation::WithinNormalLimits);
}
