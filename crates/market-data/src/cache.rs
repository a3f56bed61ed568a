//! Write-once memoization of raw provider fetches.
//!
//! The simulator recomputes everything else from scratch on every
//! request; the network fetch is the only thing worth remembering.
//! Entries are keyed by the immutable `(symbols, start, end)` tuple and
//! never invalidated or overwritten. Two concurrent misses on the same
//! key may both hit the upstream provider; whichever inserts first
//! wins, and both return identical data.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::DailyQuote;
use crate::provider::PriceProvider;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct FetchKey {
    symbols: Vec<String>,
    start: NaiveDate,
    end: NaiveDate,
}

impl FetchKey {
    fn new(symbols: &[String], start: NaiveDate, end: NaiveDate) -> Self {
        let mut symbols = symbols.to_vec();
        symbols.sort();
        symbols.dedup();
        Self {
            symbols,
            start,
            end,
        }
    }
}

/// Memoizing decorator over any [`PriceProvider`].
///
/// Only successful fetches are cached; errors propagate and the next
/// call retries the upstream provider.
pub struct CachedPriceProvider {
    inner: Arc<dyn PriceProvider>,
    cache: DashMap<FetchKey, Arc<Vec<DailyQuote>>>,
}

impl CachedPriceProvider {
    pub fn new(inner: Arc<dyn PriceProvider>) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
        }
    }
}

#[async_trait]
impl PriceProvider for CachedPriceProvider {
    fn id(&self) -> &'static str {
        self.inner.id()
    }

    async fn daily_closes(
        &self,
        symbols: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyQuote>, MarketDataError> {
        let key = FetchKey::new(symbols, start, end);

        if let Some(cached) = self.cache.get(&key) {
            debug!(provider = self.inner.id(), %start, %end, "fetch cache hit");
            return Ok(cached.as_ref().clone());
        }

        let quotes = self.inner.daily_closes(symbols, start, end).await?;

        // First writer wins; a racing fetch for the same key produced
        // the same quotes anyway.
        let stored = self
            .cache
            .entry(key)
            .or_insert_with(|| Arc::new(quotes))
            .value()
            .clone();
        Ok(stored.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        calls: AtomicUsize,
    }

    impl CountingProvider {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PriceProvider for CountingProvider {
        fn id(&self) -> &'static str {
            "COUNTING"
        }

        async fn daily_closes(
            &self,
            symbols: &[String],
            start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<DailyQuote>, MarketDataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(symbols
                .iter()
                .map(|s| DailyQuote::new(s.clone(), start, dec!(100)))
                .collect())
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[tokio::test]
    async fn identical_requests_fetch_once() {
        let inner = Arc::new(CountingProvider::new());
        let cached = CachedPriceProvider::new(inner.clone());
        let symbols = vec!["SPY".to_string()];

        let first = cached.daily_closes(&symbols, day(1), day(5)).await.unwrap();
        let second = cached.daily_closes(&symbols, day(1), day(5)).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn key_ignores_symbol_order() {
        let inner = Arc::new(CountingProvider::new());
        let cached = CachedPriceProvider::new(inner.clone());

        let ab = vec!["A".to_string(), "B".to_string()];
        let ba = vec!["B".to_string(), "A".to_string()];
        cached.daily_closes(&ab, day(1), day(5)).await.unwrap();
        cached.daily_closes(&ba, day(1), day(5)).await.unwrap();

        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn different_range_is_a_different_entry() {
        let inner = Arc::new(CountingProvider::new());
        let cached = CachedPriceProvider::new(inner.clone());
        let symbols = vec!["SPY".to_string()];

        cached.daily_closes(&symbols, day(1), day(5)).await.unwrap();
        cached.daily_closes(&symbols, day(1), day(6)).await.unwrap();

        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    }
}
