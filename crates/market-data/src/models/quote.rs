use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single daily close observation for one symbol.
///
/// Providers return these sparse: one entry per symbol per trading day,
/// with non-trading days simply absent. [`crate::PriceTable`] densifies
/// them. `close` is the adjusted close when the source publishes one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuote {
    /// Ticker symbol the observation belongs to
    pub symbol: String,

    /// Trading day of the observation
    pub date: NaiveDate,

    /// Closing price, strictly positive
    pub close: Decimal,
}

impl DailyQuote {
    pub fn new(symbol: impl Into<String>, date: NaiveDate, close: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            date,
            close,
        }
    }
}
