//! Right-hand operands for money arithmetic.
//!
//! Arithmetic accepts either another `Money` or a plain number, which is
//! read as a US dollar amount. Everything else is carried through as
//! `Unsupported` so the operation can reject it with a descriptive error.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::Value;

use super::Money;

/// An operand of `try_add` / `try_sub` / `try_rsub`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Another amount, converted into the receiver's unit.
    Money(Money),
    /// A plain number, taken to be USD.
    Number(Decimal),
    /// Anything else, described for the error message.
    Unsupported(String),
}

impl Operand {
    /// Short description of the operand kind, used in error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Money(money) => format!("money {money}"),
            Self::Number(number) => format!("number {number}"),
            Self::Unsupported(what) => what.clone(),
        }
    }
}

impl From<Money> for Operand {
    fn from(money: Money) -> Self {
        Self::Money(money)
    }
}

impl From<&Money> for Operand {
    fn from(money: &Money) -> Self {
        Self::Money(money.clone())
    }
}

impl From<Decimal> for Operand {
    fn from(number: Decimal) -> Self {
        Self::Number(number)
    }
}

macro_rules! integer_operand {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(number: $ty) -> Self {
                    Self::Number(Decimal::from(number))
                }
            }
        )*
    };
}

integer_operand!(i32, i64, u32, u64);

impl From<f64> for Operand {
    fn from(number: f64) -> Self {
        Decimal::from_f64(number).map_or_else(
            || Self::Unsupported(format!("float {number} outside the decimal range")),
            Self::Number,
        )
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Self::Unsupported(format!("string {text:?}"))
    }
}

impl From<String> for Operand {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        match value {
            Value::Number(number) => number_operand(number),
            Value::Object(_) => serde_json::from_value::<Money>(value.clone()).map_or_else(
                |err| Self::Unsupported(format!("object that is not money ({err})")),
                Self::Money,
            ),
            Value::Null => Self::Unsupported("null".to_string()),
            Value::Bool(flag) => Self::Unsupported(format!("boolean {flag}")),
            Value::String(text) => Self::from(text.as_str()),
            Value::Array(_) => Self::Unsupported("array".to_string()),
        }
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

fn number_operand(number: &serde_json::Number) -> Operand {
    if let Some(int) = number.as_i64() {
        return Operand::Number(Decimal::from(int));
    }
    if let Some(uint) = number.as_u64() {
        return Operand::Number(Decimal::from(uint));
    }
    // Parse the literal text so 19.97 stays 19.97 rather than its binary approximation.
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_or_else(
            |_| Operand::Unsupported(format!("number {text} outside the decimal range")),
            Operand::Number,
        )
}
