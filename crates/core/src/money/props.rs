//! Property-based tests for money arithmetic.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use coinage_shared::CurrencyCode;

use super::Money;
use crate::currency::RateTable;

/// Strategy to generate signed amounts (-1,000,000.00 to 1,000,000.00).
fn signed_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to pick a built-in currency code.
fn builtin_code() -> impl Strategy<Value = CurrencyCode> {
    let codes: Vec<CurrencyCode> = RateTable::builtin().codes().cloned().collect();
    prop::sample::select(codes)
}

fn within_tolerance(expected: Decimal, actual: Decimal) -> bool {
    let scale = expected.abs().max(Decimal::ONE);
    (expected - actual).abs() <= scale * dec!(0.000000001)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Converting in place to another unit and back restores the amount.
    #[test]
    fn prop_convert_round_trip(
        value in signed_amount(),
        from in builtin_code(),
        to in builtin_code(),
    ) {
        let rates = RateTable::builtin();
        let original = Money::new(value, from.clone());
        let mut money = original.clone();
        money.convert_to_with(to.clone(), &rates).unwrap();
        prop_assert_eq!(&money.unit, &to);
        money.convert_to_with(from, &rates).unwrap();
        prop_assert_eq!(&money.unit, &original.unit);
        prop_assert!(within_tolerance(original.value, money.value));
    }

    /// Adding zero in any other unit leaves a USD amount unchanged.
    #[test]
    fn prop_additive_identity(
        value in signed_amount(),
        zero_unit in builtin_code(),
    ) {
        let rates = RateTable::builtin();
        let money = Money::usd(value);
        let sum = money.try_add_with(Money::zero(zero_unit), &rates).unwrap();
        prop_assert_eq!(sum, money);
    }

    /// `a + b` and `b + a` are the same amount once both are expressed in USD.
    #[test]
    fn prop_addition_commutes_in_amount(
        a in signed_amount(),
        a_unit in builtin_code(),
        b in signed_amount(),
        b_unit in builtin_code(),
    ) {
        let rates = RateTable::builtin();
        let a = Money::new(a, a_unit);
        let b = Money::new(b, b_unit);

        let ab = a.try_add_with(&b, &rates).unwrap();
        let ba = b.try_add_with(&a, &rates).unwrap();
        prop_assert_eq!(&ab.unit, &a.unit);
        prop_assert_eq!(&ba.unit, &b.unit);

        let ab_usd = ab.converted_to_with(CurrencyCode::usd(), &rates).unwrap();
        let ba_usd = ba.converted_to_with(CurrencyCode::usd(), &rates).unwrap();
        prop_assert!(
            within_tolerance(ab_usd.value, ba_usd.value),
            "{} vs {}", ab_usd, ba_usd
        );
    }

    /// `n - m` is the negation of `m - n` for a USD number n.
    #[test]
    fn prop_reverse_subtraction_negates(
        number in signed_amount(),
        value in signed_amount(),
        unit in builtin_code(),
    ) {
        let rates = RateTable::builtin();
        let money = Money::new(value, unit);
        let forward = money.try_sub_with(number, &rates).unwrap();
        let reverse = money.try_rsub_with(number, &rates).unwrap();
        prop_assert_eq!(reverse.value, -forward.value);
        prop_assert_eq!(reverse.unit, forward.unit);
    }

    /// Mutating and non-mutating conversion agree.
    #[test]
    fn prop_convert_matches_converted(
        value in signed_amount(),
        from in builtin_code(),
        to in builtin_code(),
    ) {
        let rates = RateTable::builtin();
        let original = Money::new(value, from);
        let copy = original.converted_to_with(to.clone(), &rates).unwrap();
        let mut mutated = original;
        mutated.convert_to_with(to, &rates).unwrap();
        prop_assert_eq!(mutated, copy);
    }
}
