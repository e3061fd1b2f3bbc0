//! Money value type and unit-aware arithmetic.

pub mod arithmetic;
pub mod operand;
pub mod types;

#[cfg(test)]
mod props;

pub use operand::Operand;
pub use types::{DISPLAY_DECIMAL_PLACES, Money};
