//! Progressive tax schedule construction and validation.
//!
//! A schedule is an ordered list of contiguous [`TaxBand`]s starting at zero
//! income and ending in an open-ended top band. Each band carries the tax
//! accumulated over all lower bands (`base_tax`), so assessing an income
//! needs a single band lookup rather than a walk over lower bands.
//!
//! # Built-in schedule
//!
//! [`TaxSchedule::simplified`] returns the fixed illustrative table used by
//! the calculator app. It is arbitrary configuration, not any jurisdiction's
//! tax code.
//!
//! | Band | Income range      | Marginal rate | Base tax |
//! |------|-------------------|---------------|----------|
//! | 1    | up to 10,000      | 0%            | 0        |
//! | 2    | 10,000 to 40,000  | 10%           | 0        |
//! | 3    | 40,000 to 85,000  | 22%           | 3,000    |
//! | 4    | 85,000 to 160,000 | 24%           | 12,900   |
//! | 5    | over 160,000      | 32%           | 30,900   |
//!
//! Construction validates the table shape, so a schedule in hand always
//! satisfies the continuity invariant: at every interior boundary the lower
//! band's formula meets the next band's `base_tax` exactly.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::TaxBand;

/// Errors describing a malformed band table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The band list was empty.
    #[error("schedule has no bands")]
    NoBands,

    /// The first band did not start at zero income.
    #[error("first band must start at zero, got {0}")]
    NonZeroFirstBand(Decimal),

    /// A band did not start where the previous band ended.
    #[error("band starting at {lower} does not continue from previous upper bound {expected}")]
    NonContiguousBands { lower: Decimal, expected: Decimal },

    /// A band's upper bound was at or below its lower bound.
    #[error("band starting at {lower} has upper bound {upper} at or below it")]
    EmptyBand { lower: Decimal, upper: Decimal },

    /// A band other than the last had no upper bound.
    #[error("band starting at {lower} is unbounded but is not the last band")]
    UnboundedInnerBand { lower: Decimal },

    /// The last band had an upper bound.
    #[error("last band must be unbounded, got upper bound {0}")]
    BoundedLastBand(Decimal),

    /// A marginal rate was outside [0, 1].
    #[error("marginal rate must be between 0 and 1, got {0}")]
    InvalidMarginalRate(Decimal),

    /// A band's display percentage disagreed with its marginal rate.
    #[error("rate percent {rate_percent} does not match marginal rate {marginal_rate}")]
    RatePercentMismatch {
        marginal_rate: Decimal,
        rate_percent: u32,
    },

    /// A band's base tax disagreed with the tax accumulated by lower bands.
    #[error("band starting at {lower} has base tax {base_tax}, lower bands accumulate to {expected}")]
    DiscontinuousBaseTax {
        lower: Decimal,
        base_tax: Decimal,
        expected: Decimal,
    },
}

/// A validated progressive tax schedule.
///
/// Always holds at least one band; bands are contiguous from zero and the
/// last band is open-ended, so every non-negative income falls in exactly
/// one band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxSchedule {
    bands: Vec<TaxBand>,
}

impl TaxSchedule {
    /// Creates a schedule from an explicit band list, validating its shape.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if:
    /// - the list is empty
    /// - the first band does not start at zero
    /// - bands leave a gap, overlap, or close at or below where they open
    /// - any band but the last is unbounded, or the last band is bounded
    /// - a marginal rate falls outside [0, 1]
    /// - a display percentage disagrees with its marginal rate
    /// - a base tax disagrees with the tax accumulated by lower bands
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use taxcalc_core::{TaxBand, TaxSchedule};
    ///
    /// let schedule = TaxSchedule::new(vec![
    ///     TaxBand {
    ///         lower: dec!(0),
    ///         upper: Some(dec!(50000)),
    ///         marginal_rate: dec!(0.15),
    ///         base_tax: dec!(0),
    ///         rate_percent: 15,
    ///     },
    ///     TaxBand {
    ///         lower: dec!(50000),
    ///         upper: None,
    ///         marginal_rate: dec!(0.30),
    ///         base_tax: dec!(7500),
    ///         rate_percent: 30,
    ///     },
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(schedule.bands().len(), 2);
    /// ```
    pub fn new(bands: Vec<TaxBand>) -> Result<Self, ScheduleError> {
        let Some(first) = bands.first() else {
            return Err(ScheduleError::NoBands);
        };
        if first.lower != Decimal::ZERO {
            return Err(ScheduleError::NonZeroFirstBand(first.lower));
        }

        let last_index = bands.len() - 1;
        let mut expected_lower = Decimal::ZERO;
        let mut expected_base = Decimal::ZERO;

        for (index, band) in bands.iter().enumerate() {
            if band.marginal_rate < Decimal::ZERO || band.marginal_rate > Decimal::ONE {
                return Err(ScheduleError::InvalidMarginalRate(band.marginal_rate));
            }
            if Decimal::from(band.rate_percent) != band.marginal_rate * Decimal::ONE_HUNDRED {
                return Err(ScheduleError::RatePercentMismatch {
                    marginal_rate: band.marginal_rate,
                    rate_percent: band.rate_percent,
                });
            }
            if band.lower != expected_lower {
                return Err(ScheduleError::NonContiguousBands {
                    lower: band.lower,
                    expected: expected_lower,
                });
            }
            if band.base_tax != expected_base {
                return Err(ScheduleError::DiscontinuousBaseTax {
                    lower: band.lower,
                    base_tax: band.base_tax,
                    expected: expected_base,
                });
            }
            match band.upper {
                Some(upper) => {
                    if index == last_index {
                        return Err(ScheduleError::BoundedLastBand(upper));
                    }
                    if upper <= band.lower {
                        return Err(ScheduleError::EmptyBand {
                            lower: band.lower,
                            upper,
                        });
                    }
                    expected_base += (upper - band.lower) * band.marginal_rate;
                    expected_lower = upper;
                }
                None => {
                    if index != last_index {
                        return Err(ScheduleError::UnboundedInnerBand { lower: band.lower });
                    }
                }
            }
        }

        Ok(Self { bands })
    }

    /// Derives a schedule from upper bounds and whole-percentage rates.
    ///
    /// Lower bounds and base taxes are derived from the sequence, so the
    /// continuity invariant holds by construction. Each entry is the band's
    /// inclusive upper bound (`None` for the open-ended last band) and its
    /// rate as a whole percentage.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if the derived table fails validation, for
    /// example on an empty list, a percentage above 100, or an upper bound
    /// at or below the previous one.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use taxcalc_core::TaxSchedule;
    ///
    /// let derived = TaxSchedule::from_marginal_rates(&[
    ///     (Some(dec!(10000)), 0),
    ///     (Some(dec!(40000)), 10),
    ///     (Some(dec!(85000)), 22),
    ///     (Some(dec!(160000)), 24),
    ///     (None, 32),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(derived, TaxSchedule::simplified());
    /// ```
    pub fn from_marginal_rates(bands: &[(Option<Decimal>, u32)]) -> Result<Self, ScheduleError> {
        let mut lower = Decimal::ZERO;
        let mut base_tax = Decimal::ZERO;
        let mut derived = Vec::with_capacity(bands.len());

        for (upper, rate_percent) in bands {
            let marginal_rate = Decimal::from(*rate_percent) / Decimal::ONE_HUNDRED;
            derived.push(TaxBand {
                lower,
                upper: *upper,
                marginal_rate,
                base_tax,
                rate_percent: *rate_percent,
            });
            if let Some(upper) = upper {
                base_tax += (*upper - lower) * marginal_rate;
                lower = *upper;
            }
        }

        Self::new(derived)
    }

    /// Returns the built-in five-band illustrative schedule.
    ///
    /// See the module documentation for the full table.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use taxcalc_core::TaxSchedule;
    ///
    /// let schedule = TaxSchedule::simplified();
    ///
    /// assert_eq!(schedule.bands().len(), 5);
    /// assert_eq!(schedule.band_for(dec!(100000)).rate_percent, 24);
    /// ```
    pub fn simplified() -> Self {
        Self {
            bands: vec![
                TaxBand {
                    lower: Decimal::ZERO,
                    upper: Some(Decimal::from(10000)),
                    marginal_rate: Decimal::ZERO,
                    base_tax: Decimal::ZERO,
                    rate_percent: 0,
                },
                TaxBand {
                    lower: Decimal::from(10000),
                    upper: Some(Decimal::from(40000)),
                    marginal_rate: Decimal::new(10, 2),
                    base_tax: Decimal::ZERO,
                    rate_percent: 10,
                },
                TaxBand {
                    lower: Decimal::from(40000),
                    upper: Some(Decimal::from(85000)),
                    marginal_rate: Decimal::new(22, 2),
                    base_tax: Decimal::from(3000),
                    rate_percent: 22,
                },
                TaxBand {
                    lower: Decimal::from(85000),
                    upper: Some(Decimal::from(160000)),
                    marginal_rate: Decimal::new(24, 2),
                    base_tax: Decimal::from(12900),
                    rate_percent: 24,
                },
                TaxBand {
                    lower: Decimal::from(160000),
                    upper: None,
                    marginal_rate: Decimal::new(32, 2),
                    base_tax: Decimal::from(30900),
                    rate_percent: 32,
                },
            ],
        }
    }

    /// The bands of the schedule, ordered from lowest to highest income.
    pub fn bands(&self) -> &[TaxBand] {
        &self.bands
    }

    /// Returns the band a non-negative income falls in.
    ///
    /// An income exactly on a shared boundary belongs to the band it closes.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use taxcalc_core::TaxSchedule;
    ///
    /// let schedule = TaxSchedule::simplified();
    ///
    /// assert_eq!(schedule.band_for(dec!(40000)).rate_percent, 10);
    /// assert_eq!(schedule.band_for(dec!(40000.01)).rate_percent, 22);
    /// ```
    pub fn band_for(&self, income: Decimal) -> &TaxBand {
        self.bands
            .iter()
            .find(|band| {
                income >= band.lower
                    && (band.upper.is_none() || income <= band.upper.unwrap_or(Decimal::MAX))
            })
            // Validated schedules start at zero and end unbounded, so every
            // non-negative income matches; negative income maps to the
            // bottom band.
            .unwrap_or(&self.bands[0])
    }
}
