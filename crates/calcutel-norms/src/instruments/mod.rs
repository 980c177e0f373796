//! Built-in normative data, one module per instrument family.

pub mod boston;
pub mod edna;
pub mod idtel;
pub mod itpa;
pub mod reel;
pub mod stsg;
pub mod tecal;
pub mod teprosif;
pub mod tevi;

use crate::age::{AgeBound, AgeRange};
use crate::catalog::{AgeNormativeTable, ScoringMethod, StandardizedTest};
use crate::scoring::{Interpretation, ScoreBand};

/// Every built-in test, in the order they are offered to clinicians.
pub fn all_tests() -> Vec<StandardizedTest> {
    let mut tests = Vec::new();
    tests.extend(boston::tests());
    tests.push(reel::test());
    tests.extend(tecal::tests());
    tests.push(teprosif::test());
    tests.extend(stsg::tests());
    tests.push(itpa::test());
    tests.push(tevi::test());
    tests.extend(idtel::tests());
    tests.extend(edna::tests());
    tests
}

fn normative(id: &str, name: &str, area: &str, tables: Vec<AgeNormativeTable>) -> StandardizedTest {
    StandardizedTest {
        id: id.to_string(),
        name: name.to_string(),
        area: area.to_string(),
        method: ScoringMethod::Normative,
        tables,
    }
}

fn table(from: (u32, u32), to: (u32, u32), bands: Vec<ScoreBand>) -> AgeNormativeTable {
    AgeNormativeTable {
        age_range: AgeRange {
            from: AgeBound::new(from.0, from.1),
            to: AgeBound::new(to.0, to.1),
        },
        bands,
    }
}

fn band(
    range_label: &str,
    ds: &str,
    interpretation: Interpretation,
    min: i32,
    max: i32,
) -> ScoreBand {
    ScoreBand {
        min,
        max,
        ds: ds.to_string(),
        interpretation,
        range_label: range_label.to_string(),
    }
}

/// The common four-row layout around one standard deviation.
///
/// Rows are `(range label, min, max)` ordered Normal, Normal Lento, Riesgo,
/// Déficit.
fn ds_bands(rows: [(&str, i32, i32); 4]) -> Vec<ScoreBand> {
    const LAYOUT: [(&str, Interpretation); 4] = [
        ("> +1 DS", Interpretation::Normal),
        ("X a +1 DS", Interpretation::NormalSlow),
        ("-1 DS a X", Interpretation::Risk),
        ("< -1 DS", Interpretation::Deficit),
    ];

    rows.iter()
        .zip(LAYOUT)
        .map(|(&(label, min, max), (ds, interpretation))| band(label, ds, interpretation, min, max))
        .collect()
}
