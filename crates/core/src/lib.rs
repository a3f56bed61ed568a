//! Modelfolio Core - the buy-and-hold allocation engine.
//!
//! Given a configured universe of securities with target weights, a
//! user-selected subset, a date range and an initial amount, this crate
//! renormalizes the weights over the symbols with usable price data,
//! sizes a fixed basket of shares at the first price, marks it to
//! market daily, and produces summary metrics, a per-category breakdown
//! and CSV exports. The engine is a pure function of its inputs; the
//! only I/O happens behind the `PriceProvider` trait from the
//! market-data crate.

pub mod constants;
pub mod errors;
pub mod export;
pub mod portfolio;
pub mod universe;

// Re-export common types
pub use portfolio::*;
pub use universe::{AssetClass, SecurityMeta, Universe};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
