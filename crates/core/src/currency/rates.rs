//! Static exchange rate table.
//!
//! Every rate is the number of units of a currency per 1 USD. The table is
//! immutable once built. One table is installed process-wide at startup via
//! [`init`]; until then [`global`] serves the built-in table.

use std::collections::BTreeMap;

use once_cell::sync::OnceCell;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{info, warn};

use coinage_shared::{CurrencyCode, MoneyError, MoneyResult, RatesConfig};

static GLOBAL_RATES: OnceCell<RateTable> = OnceCell::new();

/// Immutable mapping from currency code to units per 1 USD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    rates: BTreeMap<CurrencyCode, Decimal>,
}

impl RateTable {
    /// Builds a validated rate table.
    ///
    /// Codes that normalize to the same currency keep the last rate given,
    /// with a warning. USD is added at 1 when absent. Fails with `InvalidRate`
    /// if any rate is not positive or if USD is given at anything other than 1.
    pub fn new<I, C>(rates: I) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = (C, Decimal)>,
        C: Into<CurrencyCode>,
    {
        let mut table = BTreeMap::new();
        for (code, rate) in rates {
            let code = code.into();
            if rate <= Decimal::ZERO || (code.is_usd() && rate != Decimal::ONE) {
                return Err(MoneyError::InvalidRate {
                    code: code.to_string(),
                    rate,
                });
            }
            if let Some(previous) = table.insert(code.clone(), rate) {
                warn!(
                    currency = %code,
                    %previous,
                    %rate,
                    "Duplicate currency rate, keeping the last"
                );
            }
        }
        table.entry(CurrencyCode::usd()).or_insert(Decimal::ONE);

        Ok(Self { rates: table })
    }

    /// The built-in table of sample rates.
    #[must_use]
    pub fn builtin() -> Self {
        let rates = [
            ("CHF", dec!(0.930023)),
            ("CAD", dec!(1.264553)),
            ("GBP", dec!(0.737414)),
            ("JPY", dec!(111.019919)),
            ("EUR", dec!(0.862361)),
            ("USD", dec!(1.0)),
        ];
        Self {
            rates: rates
                .into_iter()
                .map(|(code, rate)| (CurrencyCode::from(code), rate))
                .collect(),
        }
    }

    /// Builds a table from configuration. An empty table yields the built-in rates.
    pub fn from_config(config: &RatesConfig) -> MoneyResult<Self> {
        if config.table.is_empty() {
            return Ok(Self::builtin());
        }
        Self::new(
            config
                .table
                .iter()
                .map(|(code, rate)| (code.as_str(), *rate)),
        )
    }

    /// Looks up the rate for `code`.
    pub fn rate(&self, code: &CurrencyCode) -> MoneyResult<Decimal> {
        self.rates.get(code).copied().ok_or_else(|| {
            warn!(currency = %code, "Unknown currency");
            MoneyError::UnknownCurrency(code.to_string())
        })
    }

    /// Returns true if `code` has a rate.
    #[must_use]
    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.rates.contains_key(code)
    }

    /// Iterates over the known codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.rates.keys()
    }

    /// Number of currencies in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Installs the process-wide rate table.
///
/// Must be called at most once, before any money is converted through
/// [`global`]. Fails with `RatesAlreadyInitialized` on a second call or if
/// [`global`] already fell back to the built-in table.
pub fn init(table: RateTable) -> MoneyResult<()> {
    let count = table.len();
    GLOBAL_RATES
        .set(table)
        .map_err(|_| MoneyError::RatesAlreadyInitialized)?;
    info!(currencies = count, "Rate table initialized");
    Ok(())
}

/// Returns the process-wide rate table.
pub fn global() -> &'static RateTable {
    GLOBAL_RATES.get_or_init(RateTable::builtin)
}
