mod config;
mod email;
mod policy;
mod rules;

pub use config::{QualityConfig, DEFAULT_TRUSTED_EMAIL_IDENTIFIERS};
pub use policy::{classify, QualityRating};
pub use rules::CAPITAL_CITY;

use super::domain::SupplierRecord;
use serde::{Deserialize, Serialize};

/// Highest score a supplier can reach when every factor is satisfied.
pub const MAX_SCORE: u8 = 50;

/// Signals that contribute points to a supplier's quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QualityFactor {
    ValidEmail,
    TrustedEmail,
    FullyValidAddress,
    CapitalCityAddress,
    PolishPhone,
    RegisteredTradeName,
    TaxNumber,
}

impl QualityFactor {
    pub const ALL: [QualityFactor; 7] = [
        QualityFactor::ValidEmail,
        QualityFactor::TrustedEmail,
        QualityFactor::FullyValidAddress,
        QualityFactor::CapitalCityAddress,
        QualityFactor::PolishPhone,
        QualityFactor::RegisteredTradeName,
        QualityFactor::TaxNumber,
    ];

    pub fn points(&self) -> u8 {
        match self {
            QualityFactor::ValidEmail => 10,
            QualityFactor::TrustedEmail => 5,
            QualityFactor::FullyValidAddress => 10,
            QualityFactor::CapitalCityAddress => 5,
            QualityFactor::PolishPhone => 5,
            QualityFactor::RegisteredTradeName => 5,
            QualityFactor::TaxNumber => 10,
        }
    }
}

/// Stateless scorer that applies the configured allow-list to a supplier snapshot.
#[derive(Debug, Clone, Default)]
pub struct QualityScorer {
    config: QualityConfig,
}

impl QualityScorer {
    pub fn new(config: QualityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QualityConfig {
        &self.config
    }

    pub fn evaluate(&self, record: &SupplierRecord) -> QualityAssessment {
        let components = rules::score_record(record, &self.config);
        let total_score = components.iter().map(|component| component.points).sum();

        QualityAssessment {
            rating: classify(total_score),
            total_score,
            components,
        }
    }

    pub fn score(&self, record: &SupplierRecord) -> u8 {
        self.evaluate(record).total_score
    }
}

/// Discrete contribution to a score, kept for audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: QualityFactor,
    pub points: u8,
    pub notes: String,
}

/// Scoring output describing the total, its rating, and the contributing factors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityAssessment {
    pub rating: QualityRating,
    pub total_score: u8,
    pub components: Vec<ScoreComponent>,
}

impl QualityAssessment {
    pub fn has_factor(&self, factor: QualityFactor) -> bool {
        self.components
            .iter()
            .any(|component| component.factor == factor)
    }
}
