//! Breakdown domain models.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::universe::AssetClass;

/// One holding in the detail table. Numeric fields carry display
/// precision: weight 3 decimals, prices 4, shares 6, end value 2.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownRow {
    pub name: String,
    pub symbol: String,
    pub asset_class: AssetClass,
    /// Normalized weight × 100
    pub weight_pct: Decimal,
    pub start_price: Decimal,
    pub end_price: Decimal,
    pub shares: Decimal,
    pub end_value: Decimal,
}

/// Holdings of one asset class, sorted by descending weight, with the
/// section's weight subtotal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownGroup {
    pub asset_class: AssetClass,
    pub subtotal_weight_pct: Decimal,
    pub rows: Vec<BreakdownRow>,
}
