//! Parsing and validation for the calculator form.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Raw submission for `POST /calculate`.
///
/// Fields default to empty strings when absent, so a missing field reports
/// as required instead of failing form deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateForm {
    #[serde(default)]
    pub income1: String,
    #[serde(default)]
    pub income2: String,
}

/// Income amounts parsed out of a valid submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incomes {
    pub income1: Decimal,
    pub income2: Decimal,
}

impl Incomes {
    /// Combined income from both sources.
    pub fn total(&self) -> Decimal {
        self.income1 + self.income2
    }
}

impl CalculateForm {
    /// Validates both income fields, collecting every failure.
    ///
    /// Each field contributes at most one message: blank or missing input
    /// reports as required, anything else that does not parse as a
    /// non-negative number reports as invalid.
    pub fn validate(&self) -> Result<Incomes, Vec<String>> {
        let mut errors = Vec::new();

        let income1 = parse_income_required("Income Source 1", &self.income1, &mut errors);
        let income2 = parse_income_required("Income Source 2", &self.income2, &mut errors);

        match (income1, income2) {
            (Some(income1), Some(income2)) => Ok(Incomes { income1, income2 }),
            _ => Err(errors),
        }
    }
}

/// Parses one required income field, pushing a message on failure.
///
/// Commas are accepted as thousands separators (e.g. `1,234.56`).
fn parse_income_required(
    field: &str,
    value: &str,
    errors: &mut Vec<String>,
) -> Option<Decimal> {
    let normalized = value.trim().replace(',', "");
    if normalized.is_empty() {
        errors.push(format!("{field} is required"));
        return None;
    }
    match normalized.parse::<Decimal>() {
        Ok(amount) if amount >= Decimal::ZERO => Some(amount),
        _ => {
            errors.push(format!("{field} must be a valid positive number"));
            None
        }
    }
}
