use super::table;
use crate::catalog::{ScoringMethod, StandardizedTest};

/// REEL: Receptive-Expressive Emergent Language test.
///
/// Has no score bands. Its raw scores are linguistic ages in months and are
/// scored with [`crate::quotient::compute_dual_quotient`]; the single table
/// only records the ages the test applies to (birth to 3 years).
pub fn test() -> StandardizedTest {
    StandardizedTest {
        id: "reel".to_string(),
        name: "REEL".to_string(),
        area: "Lenguaje Receptivo-Expresivo".to_string(),
        method: ScoringMethod::LanguageAgeQuotient,
        tables: vec![table((0, 0), (3, 0), vec![])],
    }
}
