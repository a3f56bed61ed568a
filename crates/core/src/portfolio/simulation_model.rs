//! Simulation request/report models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::allocation::{ExcludedSymbol, Position};
use crate::portfolio::breakdown::BreakdownGroup;
use crate::portfolio::valuation::{GrowthSummary, PortfolioPoint};

/// One full recomputation request: amount, range and the enabled
/// subset of the universe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Dollars invested on the first covered date (non-negative)
    pub initial_amount: Decimal,
    pub start_date: NaiveDate,
    /// Inclusive end of the range
    pub end_date: NaiveDate,
    /// Symbols included in the simulated basket
    pub enabled_symbols: Vec<String>,
}

/// Everything the presentation layer needs from one simulation run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthReport {
    pub summary: GrowthSummary,
    /// Daily portfolio values, ascending by date (chart input)
    pub trajectory: Vec<PortfolioPoint>,
    /// Per-holding detail grouped by asset class
    pub breakdown: Vec<BreakdownGroup>,
    /// The fixed basket the run established on day one
    pub positions: Vec<Position>,
    /// Symbols left out of the basket, with reasons, for user warnings
    pub excluded: Vec<ExcludedSymbol>,
}
