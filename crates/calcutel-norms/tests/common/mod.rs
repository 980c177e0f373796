#![allow(dead_code)]

use calcutel_norms::{
    AgeBound, AgeNormativeTable, AgeRange, Catalog, ChronologicalAge, Interpretation,
    ScoreBand, ScoringMethod, StandardizedTest,
};

pub fn age(years: i32, months: i32) -> ChronologicalAge {
    ChronologicalAge::new(years, months).expect("valid age")
}

pub fn band(min: i32, max: i32, interpretation: Interpretation) -> ScoreBand {
    ScoreBand {
        min,
        max,
        ds: format!("{min}-{max}"),
        interpretation,
        range_label: format!("{min}-{max}"),
    }
}

pub fn table(from: (u32, u32), to: (u32, u32), bands: Vec<ScoreBand>) -> AgeNormativeTable {
    AgeNormativeTable {
        age_range: AgeRange {
            from: AgeBound::new(from.0, from.1),
            to: AgeBound::new(to.0, to.1),
        },
        bands,
    }
}

pub fn normative(id: &str, tables: Vec<AgeNormativeTable>) -> StandardizedTest {
    StandardizedTest {
        id: id.to_string(),
        name: id.to_uppercase(),
        area: "Fixture".to_string(),
        method: ScoringMethod::Normative,
        tables,
    }
}

/// Scores 0-60 in three bands, for ages 36-83 months.
pub fn preschool_test() -> StandardizedTest {
    normative(
        "preschool",
        vec![table(
            (3, 0),
            (6, 11),
            vec![
                band(41, 60, Interpretation::Normal),
                band(21, 40, Interpretation::Risk),
                band(0, 20, Interpretation::Deficit),
            ],
        )],
    )
}

/// Two tables that overlap during the fifth year.
pub fn overlapping_test() -> StandardizedTest {
    normative(
        "overlapping",
        vec![
            table((3, 0), (5, 0), vec![band(0, 10, Interpretation::Risk)]),
            table((4, 6), (6, 11), vec![band(0, 10, Interpretation::Normal)]),
        ],
    )
}

/// A table with a hole between 11 and 19.
pub fn gapped_test() -> StandardizedTest {
    normative(
        "gapped",
        vec![table(
            (2, 0),
            (2, 11),
            vec![
                band(20, 30, Interpretation::Normal),
                band(0, 10, Interpretation::Deficit),
            ],
        )],
    )
}

pub fn reel_like_test() -> StandardizedTest {
    StandardizedTest {
        id: "reel_fixture".to_string(),
        name: "REEL fixture".to_string(),
        area: "Fixture".to_string(),
        method: ScoringMethod::LanguageAgeQuotient,
        tables: vec![table((0, 0), (3, 0), vec![])],
    }
}

pub fn fixture_catalog() -> Catalog {
    Catalog::new(vec![
        preschool_test(),
        overlapping_test(),
        gapped_test(),
        reel_like_test(),
    ])
    .expect("fixture catalog is valid")
}
