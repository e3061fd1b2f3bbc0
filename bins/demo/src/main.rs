//! Coinage demo
//!
//! Prints the canonical money arithmetic examples using the configured rates.

use rust_decimal_macros::dec;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use coinage_core::currency::{RateTable, rates};
use coinage_core::{Money, MoneyResult};
use coinage_shared::{AppConfig, LoggingConfig};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_tracing(&config.logging);

    let table = RateTable::from_config(&config.rates)?;
    info!(currencies = table.len(), "Loaded rate table");
    rates::init(table)?;

    for line in example_lines()? {
        println!("{line}");
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn example_lines() -> MoneyResult<Vec<String>> {
    let v1 = Money::new(dec!(23.43), "EUR");
    let v2 = Money::new(dec!(19.97), "USD");

    // Money + Money takes the left unit; plain numbers are USD.
    Ok(vec![
        (&v1 + &v2)?.to_string(),
        (&v2 + &v1)?.to_string(),
        (&v1 + 3)?.to_string(),
        (3_i64 + &v1)?.to_string(),
        (&v1 - 3)?.to_string(),
        (30_i64 - &v2)?.to_string(),
    ])
}
