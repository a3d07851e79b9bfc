use serde::{Deserialize, Serialize};

/// Identifier wrapper for GPSR supplier entities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SupplierId(pub String);

impl SupplierId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl std::fmt::Display for SupplierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Postal address attached to a supplier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Outcome of the address subsystem's completeness check.
    #[serde(default)]
    pub fully_valid: bool,
    #[serde(default)]
    pub city: Option<String>,
}

impl Address {
    pub fn new(fully_valid: bool, city: Option<&str>) -> Self {
        Self {
            fully_valid,
            city: city.map(str::to_string),
        }
    }

    pub fn is_fully_valid(&self) -> bool {
        self.fully_valid
    }
}

/// Read-only snapshot of the supplier fields that feed the quality score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRecord {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub registered_trade_name: Option<String>,
    #[serde(default)]
    pub tax_number: Option<String>,
}

impl SupplierRecord {
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_registered_trade_name(mut self, name: impl Into<String>) -> Self {
        self.registered_trade_name = Some(name.into());
        self
    }

    pub fn with_tax_number(mut self, tax_number: impl Into<String>) -> Self {
        self.tax_number = Some(tax_number.into());
        self
    }
}
