use std::fmt;

use serde::{Deserialize, Serialize};

const HIGH_QUALITY_THRESHOLD: u8 = 35;
const MEDIUM_QUALITY_THRESHOLD: u8 = 20;

/// Category exposed through the `quality` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityRating {
    #[serde(rename = "High Quality")]
    High,
    #[serde(rename = "Medium Quality")]
    Medium,
    #[serde(rename = "Low Quality")]
    Low,
}

impl QualityRating {
    pub fn label(&self) -> &'static str {
        match self {
            QualityRating::High => "High Quality",
            QualityRating::Medium => "Medium Quality",
            QualityRating::Low => "Low Quality",
        }
    }
}

impl fmt::Display for QualityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a score onto its rating, checking thresholds from the top down.
pub fn classify(score: u8) -> QualityRating {
    if score >= HIGH_QUALITY_THRESHOLD {
        QualityRating::High
    } else if score >= MEDIUM_QUALITY_THRESHOLD {
        QualityRating::Medium
    } else {
        QualityRating::Low
    }
}
