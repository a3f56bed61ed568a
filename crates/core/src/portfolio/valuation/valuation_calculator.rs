//! Pure calculators for the daily value trajectory and its summary.

use log::warn;
use rust_decimal::Decimal;

use modelfolio_market_data::PriceTable;

use crate::portfolio::allocation::Position;

use super::valuation_model::{GrowthSummary, PortfolioPoint};

/// Marks the fixed basket to market on every date of the table, in the
/// table's ascending date order: `value = Σ shares × close`.
pub fn calculate_trajectory(positions: &[Position], table: &PriceTable) -> Vec<PortfolioPoint> {
    let series: Vec<(&Position, &[Decimal])> = positions
        .iter()
        .filter_map(|position| match table.closes(&position.symbol) {
            Some(closes) => Some((position, closes)),
            None => {
                warn!(
                    "position '{}' has no price series; contributing nothing",
                    position.symbol
                );
                None
            }
        })
        .collect();

    table
        .dates()
        .iter()
        .enumerate()
        .map(|(i, date)| {
            let value = series
                .iter()
                .map(|(position, closes)| position.shares * closes[i])
                .sum();
            PortfolioPoint { date: *date, value }
        })
        .collect()
}

/// Endpoint metrics of a trajectory; `None` for an empty one.
///
/// A zero start value reports `pct_change` as `None` instead of
/// raising a division error.
pub fn summarize(trajectory: &[PortfolioPoint]) -> Option<GrowthSummary> {
    let first = trajectory.first()?;
    let last = trajectory.last()?;

    let pct_change = if first.value.is_zero() {
        None
    } else {
        Some(last.value / first.value - Decimal::ONE)
    };

    Some(GrowthSummary {
        start_value: first.value,
        end_value: last.value,
        absolute_change: last.value - first.value,
        pct_change,
    })
}
