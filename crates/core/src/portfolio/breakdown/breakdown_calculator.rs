//! Pure calculator for the per-holding breakdown table.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use modelfolio_market_data::PriceTable;

use crate::constants::{PRICE_DECIMALS, SHARES_DECIMALS, VALUE_DECIMALS, WEIGHT_PCT_DECIMALS};
use crate::portfolio::allocation::{NormalizedAllocation, Position};
use crate::universe::{AssetClass, Universe};

use super::breakdown_model::{BreakdownGroup, BreakdownRow};

/// Builds the per-holding table, grouped by asset class.
///
/// One row per held symbol. Groups appear in the fixed order Equity,
/// Fixed Income, Cash, Other; empty groups are omitted; rows within a
/// group sort by descending normalized weight. Each group carries the
/// subtotal of its (display-rounded) weights, so section subtotals
/// reconcile with the renormalized 100%.
pub fn build_breakdown(
    universe: &Universe,
    allocation: &NormalizedAllocation,
    positions: &[Position],
    table: &PriceTable,
) -> Vec<BreakdownGroup> {
    let shares_by_symbol: HashMap<&str, Decimal> = positions
        .iter()
        .map(|p| (p.symbol.as_str(), p.shares))
        .collect();

    let mut rows_by_class: HashMap<AssetClass, Vec<BreakdownRow>> = HashMap::new();

    for entry in &allocation.weights {
        let (name, asset_class) = match universe.get(&entry.symbol) {
            Some(meta) => (meta.name.clone(), meta.asset_class),
            None => (entry.symbol.clone(), AssetClass::Other),
        };
        let start_price = table.first_price(&entry.symbol).unwrap_or(Decimal::ZERO);
        let end_price = table.last_price(&entry.symbol).unwrap_or(Decimal::ZERO);
        let shares = shares_by_symbol
            .get(entry.symbol.as_str())
            .copied()
            .unwrap_or(Decimal::ZERO);

        rows_by_class
            .entry(asset_class)
            .or_default()
            .push(BreakdownRow {
                name,
                symbol: entry.symbol.clone(),
                asset_class,
                weight_pct: (entry.weight * dec!(100)).round_dp(WEIGHT_PCT_DECIMALS),
                start_price: start_price.round_dp(PRICE_DECIMALS),
                end_price: end_price.round_dp(PRICE_DECIMALS),
                shares: shares.round_dp(SHARES_DECIMALS),
                end_value: (shares * end_price).round_dp(VALUE_DECIMALS),
            });
    }

    AssetClass::ORDERED
        .iter()
        .filter_map(|asset_class| {
            let mut rows = rows_by_class.remove(asset_class)?;
            rows.sort_by(|a, b| b.weight_pct.cmp(&a.weight_pct));
            let subtotal_weight_pct = rows.iter().map(|r| r.weight_pct).sum();
            Some(BreakdownGroup {
                asset_class: *asset_class,
                subtotal_weight_pct,
                rows,
            })
        })
        .collect()
}
