//! Money error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money conversion and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Currency code is not present in the rate table.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Operand is neither a Money nor a real number.
    #[error("Unsupported operand: {0}")]
    UnsupportedOperand(String),

    /// Rate table entry is not usable.
    #[error("Invalid rate for {code}: {rate}")]
    InvalidRate {
        /// Currency code of the offending entry.
        code: String,
        /// The rejected rate.
        rate: Decimal,
    },

    /// Decimal arithmetic left the representable range.
    #[error("Arithmetic overflow during {0}")]
    Overflow(&'static str),

    /// The process-wide rate table was already installed.
    #[error("Rate table is already initialized")]
    RatesAlreadyInitialized,
}

impl MoneyError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::UnsupportedOperand(_) => "UNSUPPORTED_OPERAND",
            Self::InvalidRate { .. } => "INVALID_RATE",
            Self::Overflow(_) => "OVERFLOW",
            Self::RatesAlreadyInitialized => "RATES_ALREADY_INITIALIZED",
        }
    }
}
