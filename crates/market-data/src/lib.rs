//! Modelfolio Market Data Crate
//!
//! This crate owns the price-fetching boundary for the modelfolio
//! simulator: a provider trait, the Yahoo Finance implementation, a
//! write-once fetch cache, and the dense daily price table the
//! allocation engine consumes.
//!
//! # Overview
//!
//! ```text
//! +---------------------+
//! |  SimulationService  |  (modelfolio-core)
//! +---------------------+
//!           |
//!           v
//! +---------------------+
//! | CachedPriceProvider |  (write-once memoization per (symbols, range))
//! +---------------------+
//!           |
//!           v
//! +---------------------+
//! |    PriceProvider    |  (Yahoo Finance, or a mock in tests)
//! +---------------------+
//!           |
//!           v
//! +---------------------+
//! |     PriceTable      |  (gap-filled, one close per symbol per day)
//! +---------------------+
//! ```
//!
//! # Core Types
//!
//! - [`DailyQuote`] - A single symbol/date/close observation
//! - [`PriceTable`] - Dense daily table with forward/backward gap filling
//! - [`PriceProvider`] - Async trait all data sources implement
//! - [`YahooProvider`] - Yahoo Finance implementation
//! - [`CachedPriceProvider`] - Memoizing decorator over any provider

pub mod cache;
pub mod errors;
pub mod models;
pub mod provider;

pub use cache::CachedPriceProvider;
pub use errors::MarketDataError;
pub use models::{DailyQuote, PriceTable};
pub use provider::{PriceProvider, YahooProvider};
