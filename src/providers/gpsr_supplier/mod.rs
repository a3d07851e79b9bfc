//! GPSR supplier details: domain snapshot, repository boundary, and the quality rating provider.

pub mod domain;
pub mod provider;
pub(crate) mod quality;
pub mod repository;

#[cfg(test)]
mod tests;

pub use domain::{Address, SupplierId, SupplierRecord};
pub use provider::{ProviderError, SupplierQualityProvider, FIELD, PROVIDER_TAG};
pub use quality::{
    classify, QualityAssessment, QualityConfig, QualityFactor, QualityRating, QualityScorer,
    ScoreComponent, CAPITAL_CITY, DEFAULT_TRUSTED_EMAIL_IDENTIFIERS, MAX_SCORE,
};
pub use repository::{RepositoryError, SupplierRepository};
