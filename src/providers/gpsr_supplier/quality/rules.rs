use std::sync::OnceLock;

use regex::Regex;

use crate::providers::gpsr_supplier::domain::SupplierRecord;
use super::config::QualityConfig;
use super::email::is_valid_email;
use super::{QualityFactor, ScoreComponent};

/// City whose suppliers receive the capital-city bonus.
pub const CAPITAL_CITY: &str = "Warszawa";

fn polish_phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\+48[0-9]{9}$").expect("phone pattern compiles"))
}

fn tax_number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{10}$").expect("tax number pattern compiles"))
}

fn award(components: &mut Vec<ScoreComponent>, factor: QualityFactor, notes: String) {
    components.push(ScoreComponent {
        factor,
        points: factor.points(),
        notes,
    });
}

pub(crate) fn score_record(
    record: &SupplierRecord,
    config: &QualityConfig,
) -> Vec<ScoreComponent> {
    let mut components = Vec::new();

    if let Some(email) = record.email.as_deref() {
        if is_valid_email(email) {
            award(
                &mut components,
                QualityFactor::ValidEmail,
                format!("e-mail {email} is syntactically valid"),
            );
        }

        // Compares the whole address, not its domain part; "jan@wiseb2b.eu" is not trusted.
        if config.is_trusted(email) {
            award(
                &mut components,
                QualityFactor::TrustedEmail,
                format!("e-mail {email} is on the trusted list"),
            );
        }
    }

    if let Some(address) = &record.address {
        if address.is_fully_valid() {
            award(
                &mut components,
                QualityFactor::FullyValidAddress,
                "address passed full validation".to_string(),
            );
        }

        if address.city.as_deref() == Some(CAPITAL_CITY) {
            award(
                &mut components,
                QualityFactor::CapitalCityAddress,
                format!("address located in {CAPITAL_CITY}"),
            );
        }
    }

    if let Some(phone) = record.phone.as_deref() {
        if polish_phone_pattern().is_match(phone) {
            award(
                &mut components,
                QualityFactor::PolishPhone,
                format!("phone {phone} uses the +48 format"),
            );
        }
    }

    if record.registered_trade_name.is_some() {
        award(
            &mut components,
            QualityFactor::RegisteredTradeName,
            "registered trade name provided".to_string(),
        );
    }

    if let Some(tax_number) = record.tax_number.as_deref() {
        if tax_number_pattern().is_match(tax_number) {
            award(
                &mut components,
                QualityFactor::TaxNumber,
                "tax number has 10 digits".to_string(),
            );
        }
    }

    components
}
