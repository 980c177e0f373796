use super::{band, normative, table};
use crate::catalog::StandardizedTest;
use crate::scoring::Interpretation::{Mild, Moderate, Severe, WithinNormalLimits};

/// Boston Naming Test, standard (60 items) and abbreviated (15 items) forms.
/// Adult norms, percentile bands.
pub fn tests() -> Vec<StandardizedTest> {
    vec![
        normative(
            "boston_standard",
            "Test de Boston para la Denominación (Estándar)",
            "Lenguaje Expresivo - Denominación",
            vec![table(
                (18, 0),
                (100, 0),
                vec![
                    band("56-60", "Percentil >75", WithinNormalLimits, 56, 60),
                    band("50-55", "Percentil 25-75", WithinNormalLimits, 50, 55),
                    band("45-49", "Percentil 10-24", Mild, 45, 49),
                    band("40-44", "Percentil 5-9", Moderate, 40, 44),
                    band("<40", "Percentil <5", Severe, 0, 39),
                ],
            )],
        ),
        normative(
            "boston_abbreviated",
            "Test de Boston para la Denominación (Abreviado)",
            "Lenguaje Expresivo - Denominación",
            vec![table(
                (18, 0),
                (100, 0),
                vec![
                    band("14-15", "Percentil >75", WithinNormalLimits, 14, 15),
                    band("12-13", "Percentil 25-75", WithinNormalLimits, 12, 13),
                    band("10-11", "Percentil 10-24", Mild, 10, 11),
                    band("8-9", "Percentil 5-9", Moderate, 8, 9),
                    band("<8", "Percentil <5", Severe, 0, 7),
                ],
            )],
        ),
    ]
}
