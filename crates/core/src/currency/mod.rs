//! Exchange rates and currency conversion.

pub mod conversion;
pub mod rates;

#[cfg(test)]
mod props;

pub use conversion::{convert_amount, convert_from_usd, round_for_display};
pub use rates::RateTable;
