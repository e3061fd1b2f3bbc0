//! Shared types, errors, and configuration for Coinage.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes
//! - Money error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, LoggingConfig, RatesConfig};
pub use error::{MoneyError, MoneyResult};
pub use types::CurrencyCode;
