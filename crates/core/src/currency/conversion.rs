//! Currency conversion arithmetic.
//!
//! Rates are expressed as units of a currency per 1 USD, so converting from
//! `A` to `B` divides by `rate(A)` and multiplies by `rate(B)`. Intermediate
//! results keep full decimal precision; rounding happens only for display.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use coinage_shared::{MoneyError, MoneyResult};

/// Converts `amount` from a currency quoted at `from_rate` to one quoted at `to_rate`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use coinage_core::currency::convert_amount;
///
/// // 10 USD -> EUR at 0.862361 EUR per USD
/// let eur = convert_amount(dec!(10), dec!(1), dec!(0.862361)).unwrap();
/// assert_eq!(eur, dec!(8.62361));
/// ```
pub fn convert_amount(amount: Decimal, from_rate: Decimal, to_rate: Decimal) -> MoneyResult<Decimal> {
    amount
        .checked_div(from_rate)
        .and_then(|usd| usd.checked_mul(to_rate))
        .ok_or(MoneyError::Overflow("conversion"))
}

/// Converts a USD amount into a currency quoted at `to_rate`.
pub fn convert_from_usd(amount: Decimal, to_rate: Decimal) -> MoneyResult<Decimal> {
    amount
        .checked_mul(to_rate)
        .ok_or(MoneyError::Overflow("conversion"))
}

/// Rounds a value for display using Banker's Rounding (round half to even).
///
/// Trailing zeros are not added here: a scale of 2 cannot be stored for
/// values with 27 or more integer digits. Pad when formatting with `{:.2}`.
#[must_use]
pub fn round_for_display(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}
