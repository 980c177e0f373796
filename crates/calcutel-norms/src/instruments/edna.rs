use super::{band, normative, table};
use crate::catalog::StandardizedTest;
use crate::scoring::Interpretation::{
    self, Deficit, LowNormal, NoStructure, Normal, Outstanding, StructureI, StructureII,
    StructureIII, Transition, VeryGoodDevelopment,
};
use crate::scoring::ScoreBand;

const AREA: &str = "Discurso";

/// EDNA: Evaluación del Discurso Narrativo.
///
/// The qualitative score is a narrative level 1-13 with one row per level;
/// the quantitative score uses percentile bands per age year.
pub fn tests() -> Vec<StandardizedTest> {
    vec![
        normative(
            "edna_cualitativo",
            "EDNA (Cualitativo)",
            AREA,
            vec![table((3, 0), (10, 11), level_bands())],
        ),
        normative(
            "edna_cuantitativo",
            "EDNA (Cuantitativo)",
            AREA,
            vec![
                table((4, 0), (4, 11), percentile_bands([15, 12, 4, 2])),
                table((5, 0), (5, 11), percentile_bands([19, 16, 6, 2])),
                table((6, 0), (6, 11), percentile_bands([19, 17, 11, 9])),
                table((10, 0), (11, 11), percentile_bands([24, 22, 18, 15])),
            ],
        ),
    ]
}

fn level_bands() -> Vec<ScoreBand> {
    (1..=13)
        .map(|level| {
            let interpretation = match level {
                1..=4 => NoStructure,
                5 | 6 => Transition,
                7 | 8 => StructureI,
                9 | 10 => StructureII,
                _ => StructureIII,
            };
            band(&level.to_string(), &format!("Nivel {level}"), interpretation, level, level)
        })
        .collect()
}

/// Bands from the lower cut-offs of the >p90, p75-p90, p25-p74 and p10-p24
/// rows; everything below the last cut-off is <=p10. Scores cap at 100.
fn percentile_bands(cuts: [i32; 4]) -> Vec<ScoreBand> {
    const ROWS: [(&str, Interpretation); 5] = [
        (">p90", Outstanding),
        ("p75-p90", VeryGoodDevelopment),
        ("p25-p74", Normal),
        ("p10-p24", LowNormal),
        ("<=p10", Deficit),
    ];

    let mut bands = Vec::with_capacity(ROWS.len());
    let mut upper = 100;
    for (i, (ds, interpretation)) in ROWS.into_iter().enumerate() {
        let lower = cuts.get(i).copied().unwrap_or(0);
        let label = match i {
            0 => format!("> {}", lower - 1),
            4 => format!("<= {upper}"),
            _ => format!("{lower}-{upper}"),
        };
        bands.push(band(&label, ds, interpretation, lower, upper));
        upper = lower - 1;
    }
    bands
}
