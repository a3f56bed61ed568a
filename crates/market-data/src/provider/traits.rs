//! Price provider trait definition.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::MarketDataError;
use crate::models::DailyQuote;

/// Trait for daily price data sources.
///
/// Implement this trait to add support for a new market data source.
/// The simulation service only ever talks to this trait, so tests swap
/// in in-memory implementations.
///
/// # Contract
///
/// - Returned quotes cover `[start, end]` inclusive of both endpoints;
///   sources with exclusive end semantics must extend their query
///   window internally.
/// - Quotes are sparse: non-trading days are absent, and a symbol with
///   no data in the range simply contributes no quotes. Gap filling and
///   missing-symbol reporting happen downstream in
///   [`PriceTable`](crate::PriceTable).
/// - A symbol unknown to the source is not an error for the whole
///   request; only transport-level failures are.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "YAHOO".
    ///
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Fetch daily closes for `symbols` between `start` and `end`,
    /// both inclusive.
    async fn daily_closes(
        &self,
        symbols: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyQuote>, MarketDataError>;
}
