use super::{band, normative, table};
use crate::catalog::StandardizedTest;
use crate::scoring::Interpretation::{Deficit, HighNormal, Normal, Risk};

/// TEVI-R: Test de Vocabulario en Imágenes (passive vocabulary).
pub fn test() -> StandardizedTest {
    normative(
        "tevi-r",
        "TEVI-R",
        "Vocabulario Pasivo",
        vec![table(
            (2, 6),
            (17, 0),
            vec![
                band("60-116", "Normal Alto", HighNormal, 60, 116),
                band("41-59", "Normal", Normal, 41, 59),
                band("30-40", "Riesgo", Risk, 30, 40),
                band("0-29", "Déficit", Deficit, 0, 29),
            ],
        )],
    )
}
