use serde::{Deserialize, Serialize};

/// Identifiers trusted before any deployment-specific configuration is applied.
pub const DEFAULT_TRUSTED_EMAIL_IDENTIFIERS: [&str; 3] =
    ["example.com", "my-company.eu", "wiseb2b.eu"];

/// Scoring configuration. Holds the ordered, de-duplicated trusted e-mail allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawQualityConfig")]
pub struct QualityConfig {
    trusted_email_identifiers: Vec<String>,
}

#[derive(Deserialize)]
struct RawQualityConfig {
    trusted_email_identifiers: Vec<String>,
}

impl From<RawQualityConfig> for QualityConfig {
    fn from(value: RawQualityConfig) -> Self {
        Self::new(value.trusted_email_identifiers)
    }
}

impl QualityConfig {
    pub fn new<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut trusted_email_identifiers: Vec<String> = Vec::new();
        for identifier in identifiers {
            let identifier = identifier.into();
            if !trusted_email_identifiers.contains(&identifier) {
                trusted_email_identifiers.push(identifier);
            }
        }

        Self {
            trusted_email_identifiers,
        }
    }

    pub fn trusted_email_identifiers(&self) -> &[String] {
        &self.trusted_email_identifiers
    }

    /// Exact, case-sensitive membership test against the whole candidate string.
    pub fn is_trusted(&self, candidate: &str) -> bool {
        self.trusted_email_identifiers
            .iter()
            .any(|identifier| identifier == candidate)
    }
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TRUSTED_EMAIL_IDENTIFIERS)
    }
}
