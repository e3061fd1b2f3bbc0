//! Unit-aware addition and subtraction.
//!
//! The result is always denominated in the unit of the `Money` operand that
//! supplies the context: the left operand for `money ± x`, and the money
//! itself for `number ± money`. Plain numbers are US dollars.

use std::ops::{Add, Sub};

use rust_decimal::Decimal;

use coinage_shared::{MoneyError, MoneyResult};

use super::{Money, Operand};
use crate::currency::{RateTable, convert_amount, convert_from_usd, rates};

#[derive(Debug, Clone, Copy)]
enum Direction {
    Add,
    Sub,
}

impl Direction {
    const fn name(self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Sub => "subtraction",
        }
    }

    fn apply(self, lhs: Decimal, rhs: Decimal) -> MoneyResult<Decimal> {
        let result = match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Sub => lhs.checked_sub(rhs),
        };
        result.ok_or(MoneyError::Overflow(self.name()))
    }
}

impl Money {
    /// Adds a Money or a USD number, returning a new amount in `self`'s unit.
    pub fn try_add(&self, other: impl Into<Operand>) -> MoneyResult<Self> {
        self.try_add_with(other, rates::global())
    }

    /// [`Money::try_add`] against an explicit rate table.
    pub fn try_add_with(&self, other: impl Into<Operand>, rates: &RateTable) -> MoneyResult<Self> {
        self.combine(Direction::Add, other.into(), rates)
    }

    /// Subtracts a Money or a USD number, returning a new amount in `self`'s unit.
    pub fn try_sub(&self, other: impl Into<Operand>) -> MoneyResult<Self> {
        self.try_sub_with(other, rates::global())
    }

    /// [`Money::try_sub`] against an explicit rate table.
    pub fn try_sub_with(&self, other: impl Into<Operand>, rates: &RateTable) -> MoneyResult<Self> {
        self.combine(Direction::Sub, other.into(), rates)
    }

    /// Computes `number + self`. Identical to `self + number`.
    pub fn try_radd(&self, number: impl Into<Operand>) -> MoneyResult<Self> {
        self.try_radd_with(number, rates::global())
    }

    /// [`Money::try_radd`] against an explicit rate table.
    pub fn try_radd_with(
        &self,
        number: impl Into<Operand>,
        rates: &RateTable,
    ) -> MoneyResult<Self> {
        match number.into() {
            Operand::Number(number) => self.combine(Direction::Add, Operand::Number(number), rates),
            other => Err(MoneyError::UnsupportedOperand(other.describe())),
        }
    }

    /// Computes `number - self` with the USD number converted into `self`'s unit.
    ///
    /// `30 - 19.97 USD` is `10.03 USD`.
    pub fn try_rsub(&self, number: impl Into<Operand>) -> MoneyResult<Self> {
        self.try_rsub_with(number, rates::global())
    }

    /// [`Money::try_rsub`] against an explicit rate table.
    pub fn try_rsub_with(
        &self,
        number: impl Into<Operand>,
        rates: &RateTable,
    ) -> MoneyResult<Self> {
        let Operand::Number(number) = number.into() else {
            return Err(MoneyError::UnsupportedOperand(
                "left operand of reverse subtraction must be a number".to_string(),
            ));
        };
        let converted = convert_from_usd(number, rates.rate(&self.unit)?)?;
        let value = Direction::Sub.apply(converted, self.value)?;
        Ok(Self::new(value, &self.unit))
    }

    fn combine(&self, direction: Direction, other: Operand, rates: &RateTable) -> MoneyResult<Self> {
        let converted = match other {
            Operand::Money(other) => convert_amount(
                other.value,
                rates.rate(&other.unit)?,
                rates.rate(&self.unit)?,
            )?,
            Operand::Number(number) => convert_from_usd(number, rates.rate(&self.unit)?)?,
            unsupported @ Operand::Unsupported(_) => {
                return Err(MoneyError::UnsupportedOperand(unsupported.describe()));
            }
        };
        let value = direction.apply(self.value, converted)?;
        Ok(Self::new(value, &self.unit))
    }
}

impl<T: Into<Operand>> Add<T> for &Money {
    type Output = MoneyResult<Money>;

    fn add(self, rhs: T) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<T: Into<Operand>> Add<T> for Money {
    type Output = MoneyResult<Money>;

    fn add(self, rhs: T) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<T: Into<Operand>> Sub<T> for &Money {
    type Output = MoneyResult<Money>;

    fn sub(self, rhs: T) -> Self::Output {
        self.try_sub(rhs)
    }
}

impl<T: Into<Operand>> Sub<T> for Money {
    type Output = MoneyResult<Money>;

    fn sub(self, rhs: T) -> Self::Output {
        self.try_sub(rhs)
    }
}

/// `number + money` and `number - money` for plain number types.
macro_rules! number_lhs_ops {
    ($($ty:ty),*) => {
        $(
            impl Add<Money> for $ty {
                type Output = MoneyResult<Money>;

                fn add(self, rhs: Money) -> Self::Output {
                    rhs.try_radd(self)
                }
            }

            impl Add<&Money> for $ty {
                type Output = MoneyResult<Money>;

                fn add(self, rhs: &Money) -> Self::Output {
                    rhs.try_radd(self)
                }
            }

            impl Sub<Money> for $ty {
                type Output = MoneyResult<Money>;

                fn sub(self, rhs: Money) -> Self::Output {
                    rhs.try_rsub(self)
                }
            }

            impl Sub<&Money> for $ty {
                type Output = MoneyResult<Money>;

                fn sub(self, rhs: &Money) -> Self::Output {
                    rhs.try_rsub(self)
                }
            }
        )*
    };
}

number_lhs_ops!(Decimal, i32, i64, u32, u64, f64);
