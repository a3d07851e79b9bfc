//! Quality rating for GPSR suppliers.
//!
//! The crate computes a point score over a supplier's contact and registration
//! data and exposes it as the `quality` additional field through
//! [`providers::gpsr_supplier::SupplierQualityProvider`].

pub mod config;
pub mod error;
pub mod providers;
pub mod telemetry;

use std::sync::Arc;

use config::AppConfig;
use error::AppError;
use providers::gpsr_supplier::{SupplierQualityProvider, SupplierRepository};
use tracing::info;

/// Load configuration, hook into tracing, and build the provider.
///
/// A tracing dispatcher already installed by the host is kept; provider events go to it.
pub fn bootstrap<R>(repository: Arc<R>) -> Result<SupplierQualityProvider<R>, AppError>
where
    R: SupplierRepository,
{
    let config = AppConfig::load()?;
    let subscriber = telemetry::init(&config.telemetry)?;

    let provider = SupplierQualityProvider::new(repository, config.quality);
    info!(
        environment = ?config.environment,
        ?subscriber,
        trusted_identifiers = provider.scorer().config().trusted_email_identifiers().len(),
        "supplier quality provider ready"
    );

    Ok(provider)
}
