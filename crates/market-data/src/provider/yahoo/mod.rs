//! Yahoo Finance price provider.
//!
//! Fetches daily close series through the `yahoo_finance_api` crate.
//! Works for ETFs and mutual funds alike; fund NAVs post once per day
//! and may lag a session, which the downstream gap filling absorbs.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use time::OffsetDateTime;
use tracing::{debug, warn};
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::DailyQuote;
use crate::provider::PriceProvider;

const PROVIDER_ID: &str = "YAHOO";

/// Yahoo Finance price provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector = yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: format!("Failed to initialize Yahoo connector: {}", e),
        })?;
        Ok(Self { connector })
    }

    /// Convert a calendar date to the `time::OffsetDateTime` the Yahoo
    /// API expects (midnight UTC).
    fn date_to_offset_datetime(date: NaiveDate) -> OffsetDateTime {
        let ts = date
            .and_hms_opt(0, 0, 0)
            .expect("midnight is always valid")
            .and_utc()
            .timestamp();
        OffsetDateTime::from_unix_timestamp(ts).unwrap_or_else(|_| OffsetDateTime::now_utc())
    }

    fn yahoo_quote_to_daily(
        symbol: &str,
        yahoo_quote: &yahoo::Quote,
        end: NaiveDate,
    ) -> Option<DailyQuote> {
        let date = chrono::DateTime::from_timestamp(yahoo_quote.timestamp as i64, 0)?.date_naive();
        // The query window is extended one day past `end`; clamp back.
        if date > end {
            return None;
        }

        // Prefer the adjusted close, as fund distributions would
        // otherwise show up as price drops.
        let raw = if yahoo_quote.adjclose > 0.0 {
            yahoo_quote.adjclose
        } else {
            yahoo_quote.close
        };
        if raw <= 0.0 {
            return None;
        }

        Decimal::from_f64(raw).map(|close| DailyQuote::new(symbol, date, close))
    }
}

#[async_trait]
impl PriceProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn daily_closes(
        &self,
        symbols: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyQuote>, MarketDataError> {
        let start_time = Self::date_to_offset_datetime(start);
        // Yahoo treats the range end as exclusive at day granularity;
        // extend by one day so `end` itself is covered.
        let end_time = Self::date_to_offset_datetime(end + Duration::days(1));

        let mut quotes = Vec::new();
        for symbol in symbols {
            let response = match self
                .connector
                .get_quote_history(symbol, start_time, end_time)
                .await
            {
                Ok(response) => response,
                Err(yahoo::YahooError::NoQuotes) | Err(yahoo::YahooError::NoResult) => {
                    warn!(%symbol, "no quotes returned, symbol will be reported as missing");
                    continue;
                }
                Err(e) => {
                    return Err(MarketDataError::ProviderError {
                        provider: PROVIDER_ID.to_string(),
                        message: format!("history request for '{}' failed: {}", symbol, e),
                    })
                }
            };

            match response.quotes() {
                Ok(yahoo_quotes) => {
                    let before = quotes.len();
                    quotes.extend(
                        yahoo_quotes
                            .iter()
                            .filter_map(|q| Self::yahoo_quote_to_daily(symbol, q, end)),
                    );
                    debug!(%symbol, count = quotes.len() - before, "fetched daily closes");
                }
                Err(yahoo::YahooError::NoQuotes) | Err(yahoo::YahooError::NoResult) => {
                    warn!(%symbol, "empty quote payload, symbol will be reported as missing");
                }
                Err(e) => {
                    return Err(MarketDataError::ProviderError {
                        provider: PROVIDER_ID.to_string(),
                        message: format!("quote payload for '{}' unreadable: {}", symbol, e),
                    })
                }
            }
        }

        if quotes.is_empty() {
            return Err(MarketDataError::NoDataForRange);
        }

        Ok(quotes)
    }
}
