use super::{ds_bands, normative, table};
use crate::catalog::StandardizedTest;

const AREA: &str = "Lenguaje";

/// IDTEL: total score plus five subtests, all normed on a single
/// 6y0m-9y11m table.
pub fn tests() -> Vec<StandardizedTest> {
    let subtests = [
        (
            "idtel_total",
            "IDTEL (Total)",
            [("56-60", 56, 60), ("46-55", 46, 55), ("36-45", 36, 45), ("0-35", 0, 35)],
        ),
        (
            "idtel_vocabulario_activo",
            "IDTEL (Vocabulario Activo)",
            [("10-12", 10, 12), ("8-9", 8, 9), ("6-7", 6, 7), ("0-5", 0, 5)],
        ),
        (
            "idtel_memoria_de_trabajo",
            "IDTEL (Memoria de Trabajo)",
            [("9-12", 9, 12), ("7-8", 7, 8), ("5-6", 5, 6), ("0-4", 0, 4)],
        ),
        (
            "idtel_meta_semantico",
            "IDTEL (Meta-Semántico)",
            [("11-12", 11, 12), ("9-10", 9, 10), ("7-8", 7, 8), ("0-6", 0, 6)],
        ),
        (
            "idtel_meta_fonologico",
            "IDTEL (Meta-Fonológico)",
            [("12", 12, 12), ("10-11", 10, 11), ("8-9", 8, 9), ("0-7", 0, 7)],
        ),
        (
            "idtel_meta_sintactico",
            "IDTEL (Meta-Sintáctico)",
            [("12", 12, 12), ("10-11", 10, 11), ("8-9", 8, 9), ("0-7", 0, 7)],
        ),
    ];

    subtests
        .into_iter()
        .map(|(id, name, rows)| {
            normative(id, name, AREA, vec![table((6, 0), (9, 11), ds_bands(rows))])
        })
        .collect()
}
