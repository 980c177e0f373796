use super::{ds_bands, normative, table};
use crate::catalog::StandardizedTest;

/// ITPA-R: Illinois Test of Psycholinguistic Abilities.
///
/// Only the 3y0m-3y5m and 10y tables are transcribed; ages in between have
/// no norms here.
pub fn test() -> StandardizedTest {
    normative(
        "itpa-r",
        "ITPA-R",
        "Psicolingüístico",
        vec![
            table(
                (3, 0),
                (3, 5),
                ds_bands([
                    ("38-56", 38, 56),
                    ("33-37", 33, 37),
                    ("28-32", 28, 32),
                    ("0-27", 0, 27),
                ]),
            ),
            table(
                (10, 0),
                (10, 11),
                ds_bands([
                    ("40-56", 40, 56),
                    ("35-39", 35, 39),
                    ("30-34", 30, 34),
                    ("0-29", 0, 29),
                ]),
            ),
        ],
    )
}
