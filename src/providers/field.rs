use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cache key holding the agreement the current user accepted.
pub const AGREEMENT_KEY: &str = "userAgreementId";

/// Cache data handed to providers alongside the entity identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldContext(BTreeMap<String, Value>);

impl FieldContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_agreement(agreement_id: impl Into<Value>) -> Self {
        let mut context = Self::new();
        context.insert(AGREEMENT_KEY, agreement_id);
        context
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Agreement reference, treating an explicit JSON `null` the same as a missing key.
    pub fn agreement_id(&self) -> Option<&Value> {
        self.get(AGREEMENT_KEY).filter(|value| !value.is_null())
    }
}

impl From<BTreeMap<String, Value>> for FieldContext {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Self(value)
    }
}

/// Contract the details registry uses to resolve one named field for an entity.
pub trait AdditionalFieldProvider: Send + Sync {
    type EntityId: ?Sized;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Name of the field this provider resolves.
    fn field(&self) -> &'static str;

    /// `Ok(None)` means the field does not apply to this entity or context.
    fn field_value(
        &self,
        entity_id: &Self::EntityId,
        context: Option<&FieldContext>,
    ) -> Result<Option<Value>, Self::Error>;
}
