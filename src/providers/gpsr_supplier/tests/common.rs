use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::providers::gpsr_supplier::{
    Address, QualityConfig, QualityScorer, RepositoryError, SupplierId, SupplierRecord,
    SupplierRepository,
};

pub(super) fn scorer() -> QualityScorer {
    QualityScorer::new(QualityConfig::default())
}

pub(super) fn warsaw_address() -> Address {
    Address::new(true, Some("Warszawa"))
}

/// Supplier satisfying every scoring factor. The trusted entry is a full address on purpose.
pub(super) fn complete_record() -> SupplierRecord {
    SupplierRecord::default()
        .with_email("biuro@wiseb2b.eu")
        .with_address(warsaw_address())
        .with_phone("+48123456789")
        .with_registered_trade_name("Acme Sp. z o.o.")
        .with_tax_number("1234567890")
}

pub(super) fn complete_config() -> QualityConfig {
    QualityConfig::new(["biuro@wiseb2b.eu", "wiseb2b.eu"])
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<HashMap<SupplierId, SupplierRecord>>,
    lookups: AtomicUsize,
}

impl MemoryRepository {
    pub(super) fn with(id: &str, record: SupplierRecord) -> Self {
        let repository = Self::default();
        repository
            .records
            .lock()
            .expect("repository mutex poisoned")
            .insert(SupplierId::new(id), record);
        repository
    }

    pub(super) fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl SupplierRepository for MemoryRepository {
    fn find(&self, id: &SupplierId) -> Result<Option<SupplierRecord>, RepositoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .records
            .lock()
            .expect("repository mutex poisoned")
            .get(id)
            .cloned())
    }
}

pub(super) struct UnavailableRepository;

impl SupplierRepository for UnavailableRepository {
    fn find(&self, _id: &SupplierId) -> Result<Option<SupplierRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
