//! Severity bands for each scale.
//!
//! Every band is a half-open interval `[lower, next_lower)`, so a sum sitting
//! exactly on a threshold belongs to the higher band.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::scoring::ScoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DepressionBand {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

impl DepressionBand {
    pub fn for_sum(sum: u32) -> Self {
        match sum {
            0..7 => Self::Minimal,
            7..14 => Self::Mild,
            14..21 => Self::Moderate,
            21..28 => Self::ModeratelySevere,
            _ => Self::Severe,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::ModeratelySevere => "Moderately severe",
            Self::Severe => "Severe",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnxietyBand {
    Minimal,
    Mild,
    Moderate,
    Severe,
}

impl AnxietyBand {
    pub fn for_sum(sum: u32) -> Self {
        match sum {
            0..5 => Self::Minimal,
            5..10 => Self::Mild,
            10..15 => Self::Moderate,
            _ => Self::Severe,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }
}

/// Bands on the 0–40 overall sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WellnessBand {
    Excellent,
    MinorConcerns,
    ModerateConcerns,
    SignificantConcerns,
    SevereConcerns,
}

impl WellnessBand {
    pub fn for_sum(sum: u32) -> Self {
        match sum {
            0..9 => Self::Excellent,
            9..17 => Self::MinorConcerns,
            17..25 => Self::ModerateConcerns,
            25..33 => Self::SignificantConcerns,
            _ => Self::SevereConcerns,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent mental wellness",
            Self::MinorConcerns => "Good with minor concerns",
            Self::ModerateConcerns => "Moderate concerns – consider professional support",
            Self::SignificantConcerns => "Significant concerns – professional support recommended",
            Self::SevereConcerns => {
                "Severe concerns – immediate professional support strongly recommended"
            }
        }
    }
}

macro_rules! display_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_label!(DepressionBand, AnxietyBand, WellnessBand);

/// Scores together with their bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BandedResult {
    pub scores: ScoreResult,
    pub depression_band: DepressionBand,
    pub anxiety_band: AnxietyBand,
    pub wellness_band: WellnessBand,
}

impl BandedResult {
    /// Composite description: the overall wellness band followed by the
    /// two symptom scales.
    pub fn wellness_description(&self) -> String {
        format!(
            "{}. Depression: {} ({}/28). Anxiety: {} ({}/20).",
            self.wellness_band,
            self.depression_band,
            self.scores.depression,
            self.anxiety_band,
            self.scores.anxiety,
        )
    }
}

/// Map each sum onto its band. Total over all `u32` sums.
pub fn band(result: &ScoreResult) -> BandedResult {
    BandedResult {
        scores: *result,
        depression_band: DepressionBand::for_sum(result.depression),
        anxiety_band: AnxietyBand::for_sum(result.anxiety),
        wellness_band: WellnessBand::for_sum(result.overall),
    }
}
