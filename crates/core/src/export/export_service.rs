//! CSV writers for the trajectory and breakdown tables.
//!
//! Column precision is fixed and documented: weights to 3 decimals,
//! prices to 4, shares to 6, values to 2. Dates are ISO `YYYY-MM-DD`.

use std::io::Write;

use rust_decimal::Decimal;

use crate::constants::{PRICE_DECIMALS, SHARES_DECIMALS, VALUE_DECIMALS, WEIGHT_PCT_DECIMALS};
use crate::errors::Result;
use crate::portfolio::breakdown::BreakdownGroup;
use crate::portfolio::valuation::PortfolioPoint;

/// Renders a decimal with exactly `dp` fractional digits.
fn fixed(value: Decimal, dp: u32) -> String {
    format!("{:.prec$}", value.round_dp(dp), prec = dp as usize)
}

/// Writes the daily portfolio values: `date,value`.
pub fn write_trajectory_csv<W: Write>(writer: W, trajectory: &[PortfolioPoint]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["date", "value"])?;
    for point in trajectory {
        csv_writer.write_record([
            point.date.format("%Y-%m-%d").to_string(),
            fixed(point.value, VALUE_DECIMALS),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the full per-holding breakdown, rows ordered by asset class
/// section and descending weight within each section.
pub fn write_breakdown_csv<W: Write>(writer: W, breakdown: &[BreakdownGroup]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "name",
        "symbol",
        "assetClass",
        "weightPct",
        "startPrice",
        "endPrice",
        "shares",
        "endValue",
    ])?;
    for group in breakdown {
        for row in &group.rows {
            csv_writer.write_record([
                row.name.clone(),
                row.symbol.clone(),
                row.asset_class.as_str().to_string(),
                fixed(row.weight_pct, WEIGHT_PCT_DECIMALS),
                fixed(row.start_price, PRICE_DECIMALS),
                fixed(row.end_price, PRICE_DECIMALS),
                fixed(row.shares, SHARES_DECIMALS),
                fixed(row.end_value, VALUE_DECIMALS),
            ])?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}
