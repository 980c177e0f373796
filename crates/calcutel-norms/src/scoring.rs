use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::AgeNormativeTable;
use crate::error::ScoringError;

/// Clinical interpretation attached to a score interval.
///
/// Each variant carries the label used in the published manuals, available
/// through [`Interpretation::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Interpretation {
    Normal,
    NormalSlow,
    Risk,
    Deficit,
    /// EDNA narrative levels 1–4.
    NoStructure,
    Transition,
    StructureI,
    StructureII,
    StructureIII,
    HighNormal,
    /// EDNA percentile bands.
    VeryGoodDevelopment,
    Outstanding,
    LowNormal,
    /// Language-age quotient below the expected range.
    Delayed,
    /// Boston Naming Test percentile bands.
    WithinNormalLimits,
    Mild,
    Moderate,
    Severe,
}

impl Interpretation {
    pub fn label(&self) -> &'static str {
        match self {
            Interpretation::Normal => "Normal",
            Interpretation::NormalSlow => "Normal Lento",
            Interpretation::Risk => "Riesgo",
            Interpretation::Deficit => "Déficit",
            Interpretation::NoStructure => "Sin estructura",
            Interpretation::Transition => "Transición",
            Interpretation::StructureI => "Estructura I",
            Interpretation::StructureII => "Estructura II",
            Interpretation::StructureIII => "Estructura III",
            Interpretation::HighNormal => "Normal Alto",
            Interpretation::VeryGoodDevelopment => "Muy buen desarrollo",
            Interpretation::Outstanding => "Sobresaliente",
            Interpretation::LowNormal => "Normal bajo",
            Interpretation::Delayed => "Retraso o Dificultad",
            Interpretation::WithinNormalLimits => "Dentro de los límites normales",
            Interpretation::Mild => "Leve",
            Interpretation::Moderate => "Moderado",
            Interpretation::Severe => "Severo",
        }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of a baremo: an inclusive raw-score interval and what it means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBand {
    pub min: i32,
    pub max: i32,
    /// Standard-deviation (or percentile) label, e.g. `"> +1 DS"`.
    pub ds: String,
    pub interpretation: Interpretation,
    /// The interval as printed in the manual, e.g. `"< 39"`.
    pub range_label: String,
}

impl ScoreBand {
    pub fn contains(&self, score: i32) -> bool {
        self.min <= score && score <= self.max
    }

    pub fn overlaps(&self, other: &ScoreBand) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// An interval with `min > max` can never match.
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

/// Find the score interval of `table` that contains `score`.
///
/// Intervals are checked in catalog order; the first containing one wins.
/// Scores in a gap, below zero, or above the top interval are
/// [`ScoringError::OutOfRange`].
pub fn classify(table: &AgeNormativeTable, score: i32) -> Result<&ScoreBand, ScoringError> {
    table
        .bands
        .iter()
        .find(|band| band.contains(score))
        .ok_or(ScoringError::OutOfRange {
            score,
            age_range: table.age_range,
        })
}
