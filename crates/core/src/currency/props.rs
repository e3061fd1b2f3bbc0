//! Property-based tests for currency conversion.
//!
//! - Round trip: converting U -> V -> U returns the original amount
//! - Same currency conversion is the identity

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::conversion::convert_amount;
use super::rates::RateTable;

/// Strategy to generate signed amounts (-1,000,000.00 to 1,000,000.00).
fn signed_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to pick a built-in rate.
fn builtin_rate() -> impl Strategy<Value = Decimal> {
    let rates: Vec<Decimal> = RateTable::builtin()
        .codes()
        .filter_map(|code| RateTable::builtin().rate(code).ok())
        .collect();
    prop::sample::select(rates)
}

/// Strategy to generate arbitrary positive rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Relative tolerance of 1e-9, floored at an absolute 1e-9 near zero.
fn within_tolerance(expected: Decimal, actual: Decimal) -> bool {
    let scale = expected.abs().max(Decimal::ONE);
    (expected - actual).abs() <= scale * dec!(0.000000001)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* amount and pair of built-in rates, converting there and back
    /// SHALL return the original amount within tolerance.
    #[test]
    fn prop_round_trip_builtin(
        amount in signed_amount(),
        from in builtin_rate(),
        to in builtin_rate(),
    ) {
        let there = convert_amount(amount, from, to).unwrap();
        let back = convert_amount(there, to, from).unwrap();
        prop_assert!(
            within_tolerance(amount, back),
            "{} -> {} -> {}", amount, there, back
        );
    }

    /// Same as above with arbitrary positive rates.
    #[test]
    fn prop_round_trip_any_rate(
        amount in signed_amount(),
        from in positive_rate(),
        to in positive_rate(),
    ) {
        let there = convert_amount(amount, from, to).unwrap();
        let back = convert_amount(there, to, from).unwrap();
        prop_assert!(within_tolerance(amount, back));
    }

    /// Converting with equal source and target rates preserves the amount.
    #[test]
    fn prop_same_rate_is_identity(
        amount in signed_amount(),
        rate in builtin_rate(),
    ) {
        let result = convert_amount(amount, rate, rate).unwrap();
        prop_assert!(within_tolerance(amount, result));
    }
}
