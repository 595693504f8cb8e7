//! Income tax assessment against a progressive schedule.
//!
//! Tax owed on an income is `base_tax + (income - lower) * marginal_rate`
//! for the single band the income falls in. Each band's `base_tax` already
//! encodes the tax of all fully consumed lower bands, so the assessment is
//! one lookup and one multiply, with no walk over the rest of the table.

use rust_decimal::Decimal;
use tracing::warn;

use crate::TaxAssessment;
use crate::calculations::common::{max, round_half_up};
use crate::calculations::schedule::TaxSchedule;

/// Calculator assessing incomes against a validated [`TaxSchedule`].
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxcalc_core::{TaxCalculator, TaxSchedule};
///
/// let schedule = TaxSchedule::simplified();
/// let calculator = TaxCalculator::new(&schedule);
///
/// let assessment = calculator.calculate(dec!(25000));
///
/// // (25000 - 10000) * 0.10 = 1500
/// assert_eq!(assessment.tax, dec!(1500.00));
/// assert_eq!(assessment.rate_percent, 10);
/// ```
#[derive(Debug, Clone)]
pub struct TaxCalculator<'a> {
    schedule: &'a TaxSchedule,
}

impl<'a> TaxCalculator<'a> {
    /// Creates a calculator over the given schedule.
    pub fn new(schedule: &'a TaxSchedule) -> Self {
        Self { schedule }
    }

    /// Assesses a total income and returns the tax owed with the band's
    /// display percentage.
    ///
    /// The function is total: validated schedules cover every non-negative
    /// income, and negative income is clamped to zero before the lookup.
    /// The returned tax is rounded to cents, half-up.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use taxcalc_core::{TaxCalculator, TaxSchedule};
    ///
    /// let schedule = TaxSchedule::simplified();
    /// let calculator = TaxCalculator::new(&schedule);
    ///
    /// let assessment = calculator.calculate(dec!(100000));
    ///
    /// // 12900 + (100000 - 85000) * 0.24 = 16500
    /// assert_eq!(assessment.tax, dec!(16500.00));
    /// assert_eq!(assessment.rate_percent, 24);
    /// ```
    pub fn calculate(&self, income: Decimal) -> TaxAssessment {
        if income < Decimal::ZERO {
            warn!(
                income = %income,
                "negative income clamped to zero for assessment"
            );
        }
        let income = max(income, Decimal::ZERO);

        let band = self.schedule.band_for(income);
        let marginal_income = income - band.lower;
        let tax = band.base_tax + (marginal_income * band.marginal_rate);

        TaxAssessment {
            tax: round_half_up(tax),
            rate_percent: band.rate_percent,
        }
    }
}
