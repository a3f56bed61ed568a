use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::errors::MarketDataError;
use crate::models::DailyQuote;

/// Dense daily price table: one close per retained symbol per date.
///
/// Built from the sparse quotes a provider returns. Gaps are filled by
/// carrying the last known close forward, then carrying the earliest
/// known close backward over any leading gap, so valuation never sees a
/// missing price. Symbols with no data at all in the range are dropped
/// from the table and recorded in `missing_symbols` so callers can warn
/// the user instead of silently losing a holding.
#[derive(Clone, Debug, Default)]
pub struct PriceTable {
    dates: Vec<NaiveDate>,
    closes: HashMap<String, Vec<Decimal>>,
    symbols: Vec<String>,
    missing_symbols: Vec<String>,
}

impl PriceTable {
    /// Builds a dense table from sparse quotes.
    ///
    /// `requested` is the full set of symbols the caller asked for; any
    /// of them without a single quote ends up in [`missing_symbols`].
    /// Fails with [`MarketDataError::NoDataForRange`] when every
    /// requested symbol came back empty.
    ///
    /// # Algorithm
    /// 1. Index quotes per symbol by date
    /// 2. Sort the union of observed dates ascending
    /// 3. Per symbol: walk the dates carrying the last known close
    ///    forward, then fill any leading gap from the earliest close
    ///
    /// [`missing_symbols`]: Self::missing_symbols
    pub fn from_quotes(
        requested: &[String],
        quotes: Vec<DailyQuote>,
    ) -> Result<Self, MarketDataError> {
        let mut by_symbol: HashMap<String, BTreeMap<NaiveDate, Decimal>> = HashMap::new();
        let mut date_set: BTreeMap<NaiveDate, ()> = BTreeMap::new();

        for quote in quotes {
            if quote.close <= Decimal::ZERO {
                warn!(
                    symbol = %quote.symbol,
                    date = %quote.date,
                    "skipping non-positive close"
                );
                continue;
            }
            date_set.insert(quote.date, ());
            by_symbol
                .entry(quote.symbol)
                .or_default()
                .insert(quote.date, quote.close);
        }

        let dates: Vec<NaiveDate> = date_set.into_keys().collect();

        let mut symbols = Vec::new();
        let mut missing_symbols = Vec::new();
        let mut closes: HashMap<String, Vec<Decimal>> = HashMap::new();

        for symbol in requested {
            let Some(observed) = by_symbol.get(symbol) else {
                missing_symbols.push(symbol.clone());
                continue;
            };

            let mut series = Vec::with_capacity(dates.len());
            let mut last_known: Option<Decimal> = None;
            let mut leading_gap = 0usize;
            for date in &dates {
                if let Some(close) = observed.get(date) {
                    last_known = Some(*close);
                }
                match last_known {
                    Some(close) => series.push(close),
                    None => leading_gap += 1,
                }
            }

            // Backward-fill the leading gap from the earliest observation.
            // `observed` is non-empty here, so the unwrap_or arm is the
            // degenerate no-dates case only.
            let earliest = observed
                .values()
                .next()
                .copied()
                .unwrap_or(Decimal::ZERO);
            let mut filled = vec![earliest; leading_gap];
            filled.append(&mut series);

            closes.insert(symbol.clone(), filled);
            symbols.push(symbol.clone());
        }

        missing_symbols.sort();

        if symbols.is_empty() || dates.is_empty() {
            return Err(MarketDataError::NoDataForRange);
        }

        Ok(Self {
            dates,
            closes,
            symbols,
            missing_symbols,
        })
    }

    /// Trading days covered, ascending.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Symbols retained in the table, in requested order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Requested symbols that had no data at all in the range.
    pub fn missing_symbols(&self) -> &[String] {
        &self.missing_symbols
    }

    /// Dense close series for a symbol, aligned with [`dates`](Self::dates).
    pub fn closes(&self, symbol: &str) -> Option<&[Decimal]> {
        self.closes.get(symbol).map(Vec::as_slice)
    }

    /// Close on the first covered date.
    pub fn first_price(&self, symbol: &str) -> Option<Decimal> {
        self.closes.get(symbol).and_then(|s| s.first().copied())
    }

    /// Close on the last covered date.
    pub fn last_price(&self, symbol: &str) -> Option<Decimal> {
        self.closes.get(symbol).and_then(|s| s.last().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }
}
