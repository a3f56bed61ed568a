//! Valuation domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Portfolio value on one trading day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// Endpoint metrics of a trajectory.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthSummary {
    pub start_value: Decimal,
    pub end_value: Decimal,
    pub absolute_change: Decimal,
    /// `end / start - 1`, or `None` when the start value is zero
    /// (a zero initial amount); never NaN
    pub pct_change: Option<Decimal>,
}
