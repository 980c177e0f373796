use super::{ds_bands, normative, table};
use crate::catalog::StandardizedTest;

const AREA: &str = "Comprensión";

/// TECAL: Test de Comprensión Auditiva del Lenguaje, total score and its
/// three subtests. Yearly tables from 3 to 6 years.
pub fn tests() -> Vec<StandardizedTest> {
    vec![
        normative(
            "tecal_total",
            "TECAL (Total)",
            AREA,
            vec![
                table(
                    (3, 0),
                    (3, 11),
                    ds_bands([
                        ("> 58", 59, 101),
                        ("46-58", 46, 58),
                        ("39-45", 39, 45),
                        ("< 39", 0, 38),
                    ]),
                ),
                table(
                    (4, 0),
                    (4, 11),
                    ds_bands([
                        ("> 72", 73, 101),
                        ("54-72", 54, 72),
                        ("45-53", 45, 53),
                        ("< 45", 0, 44),
                    ]),
                ),
                table(
                    (5, 0),
                    (5, 11),
                    ds_bands([
                        ("> 89", 90, 101),
                        ("78-89", 78, 89),
                        ("72-77", 72, 77),
                        ("< 72", 0, 71),
                    ]),
                ),
                table(
                    (6, 0),
                    (6, 11),
                    ds_bands([
                        ("> 95", 96, 101),
                        ("84-95", 84, 95),
                        ("79-83", 79, 83),
                        ("< 79", 0, 78),
                    ]),
                ),
            ],
        ),
        normative(
            "tecal_vocabulario",
            "TECAL (Vocabulario)",
            AREA,
            vec![
                table(
                    (3, 0),
                    (3, 11),
                    ds_bands([
                        ("29-37", 29, 37),
                        ("21-28", 21, 28),
                        ("13-20", 13, 20),
                        ("0-12", 0, 12),
                    ]),
                ),
                table(
                    (4, 0),
                    (4, 11),
                    ds_bands([
                        ("34-40", 34, 40),
                        ("30-33", 30, 33),
                        ("26-29", 26, 29),
                        ("0-25", 0, 25),
                    ]),
                ),
                table(
                    (5, 0),
                    (5, 11),
                    ds_bands([
                        ("36-41", 36, 41),
                        ("32-35", 32, 35),
                        ("28-31", 28, 31),
                        ("0-27", 0, 27),
                    ]),
                ),
                table(
                    (6, 0),
                    (6, 11),
                    ds_bands([
                        ("36-41", 36, 41),
                        ("33-35", 33, 35),
                        ("30-32", 30, 32),
                        ("0-29", 0, 29),
                    ]),
                ),
            ],
        ),
        normative(
            "tecal_morfologia",
            "TECAL (Morfología)",
            AREA,
            vec![
                table(
                    (3, 0),
                    (3, 11),
                    ds_bands([
                        ("31-38", 31, 38),
                        ("26-30", 26, 30),
                        ("21-25", 21, 25),
                        ("0-20", 0, 20),
                    ]),
                ),
                table(
                    (4, 0),
                    (4, 11),
                    ds_bands([
                        ("33-39", 33, 39),
                        ("29-32", 29, 32),
                        ("25-28", 25, 28),
                        ("0-24", 0, 24),
                    ]),
                ),
                table(
                    (5, 0),
                    (5, 11),
                    ds_bands([
                        ("33-39", 33, 39),
                        ("30-32", 30, 32),
                        ("27-29", 27, 29),
                        ("0-26", 0, 26),
                    ]),
                ),
                table(
                    (6, 0),
                    (6, 11),
                    ds_bands([
                        ("34-39", 34, 39),
                        ("31-33", 31, 33),
                        ("28-30", 28, 30),
                        ("0-27", 0, 27),
                    ]),
                ),
            ],
        ),
        normative(
            "tecal_sintaxis",
            "TECAL (Sintaxis)",
            AREA,
            vec![
                table(
                    (3, 0),
                    (3, 11),
                    ds_bands([
                        ("25-34", 25, 34),
                        ("20-24", 20, 24),
                        ("15-19", 15, 19),
                        ("0-14", 0, 14),
                    ]),
                ),
                table(
                    (4, 0),
                    (4, 11),
                    ds_bands([
                        ("28-36", 28, 36),
                        ("24-27", 24, 27),
                        ("20-23", 20, 23),
                        ("0-19", 0, 19),
                    ]),
                ),
                table(
                    (5, 0),
                    (5, 11),
                    ds_bands([
                        ("31-36", 31, 36),
                        ("27-30", 27, 30),
                        ("23-26", 23, 26),
                        ("0-22", 0, 22),
                    ]),
                ),
                table(
                    (6, 0),
                    (6, 11),
                    ds_bands([
                        ("31-35", 31, 35),
                        ("27-30", 27, 30),
                        ("23-26", 23, 26),
                        ("0-22", 0, 22),
                    ]),
                ),
            ],
        ),
    ]
}
