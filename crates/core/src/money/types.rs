//! Money value type.
//!
//! A `Money` pairs a decimal amount with a currency code. Construction does
//! not consult the rate table: an unknown code is accepted and only fails
//! when a conversion or arithmetic operation first looks it up. Use
//! [`Money::try_new`] to fail fast instead.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use coinage_shared::{CurrencyCode, MoneyResult};

use crate::currency::{RateTable, convert_amount, rates, round_for_display};

/// Digits after the decimal point in the display form.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// A monetary amount in a currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount, in whole units of `unit`.
    pub value: Decimal,
    /// Currency code the amount is denominated in.
    #[serde(default)]
    pub unit: CurrencyCode,
}

impl Money {
    /// Creates a new Money instance without validating the unit.
    #[must_use]
    pub fn new(value: Decimal, unit: impl Into<CurrencyCode>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Creates a US dollar amount.
    #[must_use]
    pub fn usd(value: Decimal) -> Self {
        Self::new(value, CurrencyCode::usd())
    }

    /// Creates a Money whose unit must exist in the process-wide rate table.
    pub fn try_new(value: Decimal, unit: impl Into<CurrencyCode>) -> MoneyResult<Self> {
        Self::try_new_with(value, unit, rates::global())
    }

    /// Creates a Money whose unit must exist in `rates`.
    pub fn try_new_with(
        value: Decimal,
        unit: impl Into<CurrencyCode>,
        rates: &RateTable,
    ) -> MoneyResult<Self> {
        let unit = unit.into();
        rates.rate(&unit)?;
        Ok(Self { value, unit })
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(unit: impl Into<CurrencyCode>) -> Self {
        Self::new(Decimal::ZERO, unit)
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.value.is_sign_negative() && !self.value.is_zero()
    }

    /// Converts this amount in place to `unit`.
    ///
    /// Value and unit change together; on error `self` is left untouched.
    pub fn convert_to(&mut self, unit: impl Into<CurrencyCode>) -> MoneyResult<()> {
        self.convert_to_with(unit, rates::global())
    }

    /// Converts this amount in place to `unit` using an explicit rate table.
    pub fn convert_to_with(
        &mut self,
        unit: impl Into<CurrencyCode>,
        rates: &RateTable,
    ) -> MoneyResult<()> {
        *self = self.converted_to_with(unit, rates)?;
        Ok(())
    }

    /// Returns this amount expressed in `unit`, leaving `self` unchanged.
    pub fn converted_to(&self, unit: impl Into<CurrencyCode>) -> MoneyResult<Self> {
        self.converted_to_with(unit, rates::global())
    }

    /// Returns this amount expressed in `unit` using an explicit rate table.
    pub fn converted_to_with(
        &self,
        unit: impl Into<CurrencyCode>,
        rates: &RateTable,
    ) -> MoneyResult<Self> {
        let unit = unit.into();
        let from_rate = rates.rate(&self.unit)?;
        let to_rate = rates.rate(&unit)?;
        let value = convert_amount(self.value, from_rate, to_rate)?;

        debug!(from = %self.unit, to = %unit, %value, "Converted money");
        Ok(Self { value, unit })
    }

    /// Returns the amount with two decimals followed by the unit, e.g. `"26.98 EUR"`.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.prec$} {}",
            round_for_display(self.value, DISPLAY_DECIMAL_PLACES),
            self.unit,
            prec = DISPLAY_DECIMAL_PLACES as usize
        )
    }
}
