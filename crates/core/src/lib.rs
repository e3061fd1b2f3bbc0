//! Core money logic for Coinage.
//!
//! A [`Money`] pairs a decimal amount with a currency code. Amounts convert
//! between units through a static [`RateTable`] quoted in units per 1 USD,
//! and add or subtract with unit awareness: the result takes the unit of the
//! money that supplies the context, and plain numbers count as US dollars.
//!
//! # Modules
//!
//! - `currency` - Rate table and conversion arithmetic
//! - `money` - The `Money` type, its operands, and arithmetic
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use coinage_core::Money;
//!
//! let v1 = Money::new(dec!(23.43), "EUR");
//! let v2 = Money::new(dec!(19.97), "USD");
//!
//! assert_eq!((&v1 + &v2).unwrap().to_string(), "40.65 EUR");
//! assert_eq!((30_i64 - &v2).unwrap().to_string(), "10.03 USD");
//! ```

pub mod currency;
pub mod money;

pub use coinage_shared::{CurrencyCode, MoneyError, MoneyResult};
pub use currency::RateTable;
pub use money::{Money, Operand};
