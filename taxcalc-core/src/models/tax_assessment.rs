use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of assessing a total income against a tax schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAssessment {
    /// Tax owed, rounded to cents.
    pub tax: Decimal,
    /// Display percentage of the band the income fell in.
    pub rate_percent: u32,
}
