//! Shared money helpers for schedule calculations and display output.

use rust_decimal::Decimal;

/// Rounds a decimal value to two decimal places, half-up.
///
/// Midpoints round away from zero, following the usual financial convention.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxcalc_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(1500.004)), dec!(1500.00));
/// assert_eq!(round_half_up(dec!(1500.005)), dec!(1500.01));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxcalc_core::calculations::common::max;
///
/// assert_eq!(max(dec!(-250.00), dec!(0)), dec!(0));
/// ```
pub fn max(a: Decimal, b: Decimal) -> Decimal {
    if a > b { a } else { b }
}

/// Formats a monetary amount with exactly two decimal places.
///
/// The value is rounded half-up first, then padded so whole amounts still
/// render as `1500.00` rather than `1500`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxcalc_core::calculations::common::format_amount;
///
/// assert_eq!(format_amount(dec!(1500)), "1500.00");
/// assert_eq!(format_amount(dec!(2333.333)), "2333.33");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = round_half_up(value);
    rounded.rescale(2);
    rounded.to_string()
}
