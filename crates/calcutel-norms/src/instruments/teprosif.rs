use super::{ds_bands, normative, table};
use crate::catalog::StandardizedTest;

/// TEPROSIF-R: Test para Evaluar Procesos de Simplificación Fonológica,
/// repetition score. A single table spans 3 to 6 years.
pub fn test() -> StandardizedTest {
    normative(
        "teprolif-r-repeticion",
        "TEPROSIF-R (Repetición)",
        "Habla",
        vec![table(
            (3, 0),
            (6, 11),
            ds_bands([
                ("33 - 37", 33, 37),
                ("27 - 32", 27, 32),
                ("21 - 26", 21, 26),
                ("0 - 20", 0, 20),
            ]),
        )],
    )
}
