//! Core error types for the modelfolio engine.
//!
//! Everything here is detected before or at the boundary of the
//! engine's entry points and surfaced with a human-readable cause; the
//! engine performs no retries and no silent recovery beyond the
//! documented gap-filling and weight-renormalization behavior.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use modelfolio_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the allocation engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Start date {start} is after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Empty selection: {0}")]
    EmptySelection(String),

    #[error("No usable first price for '{symbol}'")]
    MissingPrice { symbol: String },

    #[error("Non-positive first price for '{symbol}': {price}")]
    InvalidPrice { symbol: String, price: Decimal },

    #[error("Initial amount must be non-negative, got {0}")]
    InvalidAmount(Decimal),

    #[error("Invalid universe configuration: {0}")]
    InvalidUniverse(String),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Export failed: {0}")]
    Export(String),
}

// === From implementations for common error types ===

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Export(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Export(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidUniverse(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
