use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single band of a progressive tax schedule.
///
/// Income strictly above `lower` and at or below `upper` is taxed at
/// `marginal_rate`; `base_tax` is the tax accumulated over all lower bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBand {
    pub lower: Decimal,
    /// Inclusive upper bound. `None` marks the open-ended top band.
    pub upper: Option<Decimal>,
    pub marginal_rate: Decimal,
    pub base_tax: Decimal,
    /// The marginal rate expressed as a whole percentage, for display.
    pub rate_percent: u32,
}
