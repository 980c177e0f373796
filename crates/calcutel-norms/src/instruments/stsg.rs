use super::{ds_bands, normative, table};
use crate::catalog::StandardizedTest;

const AREA: &str = "Lenguaje";

/// STSG: Screening Test of Spanish Grammar, expressive and receptive parts.
pub fn tests() -> Vec<StandardizedTest> {
    vec![
        normative(
            "stsg-expresivo",
            "STSG (Expresivo)",
            AREA,
            vec![
                table(
                    (3, 0),
                    (3, 11),
                    ds_bands([("> 30", 31, 44), ("15-30", 15, 30), ("8-14", 8, 14), ("< 8", 0, 7)]),
                ),
                table(
                    (4, 0),
                    (4, 11),
                    ds_bands([
                        ("> 36", 37, 44),
                        ("21-36", 21, 36),
                        ("14-20", 14, 20),
                        ("< 14", 0, 13),
                    ]),
                ),
                table(
                    (5, 0),
                    (5, 11),
                    ds_bands([
                        ("> 41", 42, 44),
                        ("29-41", 29, 41),
                        ("23-28", 23, 28),
                        ("< 23", 0, 22),
                    ]),
                ),
                table(
                    (6, 0),
                    (7, 11),
                    ds_bands([
                        ("> 43", 44, 44),
                        ("36-43", 36, 43),
                        ("32-35", 32, 35),
                        ("< 32", 0, 31),
                    ]),
                ),
            ],
        ),
        normative(
            "stsg-comprensivo",
            "STSG (Receptivo)",
            AREA,
            vec![
                table(
                    (3, 0),
                    (3, 11),
                    ds_bands([
                        ("> 35", 36, 44),
                        ("24-35", 24, 35),
                        ("19-23", 19, 23),
                        ("< 19", 0, 18),
                    ]),
                ),
                table(
                    (4, 0),
                    (4, 11),
                    ds_bands([
                        ("> 37", 38, 44),
                        ("29-37", 29, 37),
                        ("25-28", 25, 28),
                        ("< 25", 0, 24),
                    ]),
                ),
                table(
                    (5, 0),
                    (5, 11),
                    ds_bands([
                        ("> 42", 43, 44),
                        ("34-42", 34, 42),
                        ("30-33", 30, 33),
                        ("< 30", 0, 29),
                    ]),
                ),
                // The test tops out at 44, so the "> 44" row is empty as published.
                table(
                    (6, 0),
                    (7, 11),
                    ds_bands([
                        ("> 44", 45, 44),
                        ("37-44", 37, 44),
                        ("33-36", 33, 36),
                        ("< 33", 0, 32),
                    ]),
                ),
            ],
        ),
    ]
}
