use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use super::domain::SupplierId;
use super::quality::{QualityConfig, QualityRating, QualityScorer};
use super::repository::{RepositoryError, SupplierRepository};
use crate::providers::field::{AdditionalFieldProvider, FieldContext};

/// Field served by [`SupplierQualityProvider`].
pub const FIELD: &str = "quality";

/// Registry tag under which GPSR supplier detail providers are collected.
pub const PROVIDER_TAG: &str = "details_provider.gpsr_supplier";

/// Resolves the `quality` field for GPSR suppliers.
pub struct SupplierQualityProvider<R> {
    repository: Arc<R>,
    scorer: QualityScorer,
}

impl<R> SupplierQualityProvider<R>
where
    R: SupplierRepository,
{
    pub fn new(repository: Arc<R>, config: QualityConfig) -> Self {
        Self {
            repository,
            scorer: QualityScorer::new(config),
        }
    }

    pub fn scorer(&self) -> &QualityScorer {
        &self.scorer
    }

    /// Rate a supplier.
    ///
    /// Returns `Ok(None)` when the context carries no agreement reference or the
    /// supplier does not exist. Repository failures are returned, never swallowed.
    pub fn quality(
        &self,
        supplier_id: &SupplierId,
        context: Option<&FieldContext>,
    ) -> Result<Option<QualityRating>, ProviderError> {
        if context.and_then(FieldContext::agreement_id).is_none() {
            debug!(supplier = %supplier_id, "no agreement in context; quality not applicable");
            return Ok(None);
        }

        let record = match self.repository.find(supplier_id) {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!(supplier = %supplier_id, "supplier not found; quality not applicable");
                return Ok(None);
            }
            Err(err) => {
                warn!(supplier = %supplier_id, error = %err, "supplier lookup failed");
                return Err(err.into());
            }
        };

        let assessment = self.scorer.evaluate(&record);
        debug!(
            supplier = %supplier_id,
            score = assessment.total_score,
            rating = %assessment.rating,
            "supplier quality rated"
        );

        Ok(Some(assessment.rating))
    }
}

impl<R> AdditionalFieldProvider for SupplierQualityProvider<R>
where
    R: SupplierRepository,
{
    type EntityId = SupplierId;
    type Error = ProviderError;

    fn field(&self) -> &'static str {
        FIELD
    }

    fn field_value(
        &self,
        entity_id: &SupplierId,
        context: Option<&FieldContext>,
    ) -> Result<Option<Value>, ProviderError> {
        let rating = self.quality(entity_id, context)?;
        Ok(rating.map(|rating| Value::String(rating.label().to_string())))
    }
}

/// Error raised by the quality provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("supplier lookup failed: {0}")]
    Repository(#[from] RepositoryError),
}
