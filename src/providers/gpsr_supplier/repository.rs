use super::domain::{SupplierId, SupplierRecord};

/// Read access to supplier snapshots so the provider can be exercised in isolation.
pub trait SupplierRepository: Send + Sync {
    fn find(&self, id: &SupplierId) -> Result<Option<SupplierRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
    #[error("stored supplier {id} is unreadable: {reason}")]
    Corrupt { id: SupplierId, reason: String },
}
