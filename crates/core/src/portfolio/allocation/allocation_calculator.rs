//! Pure calculators for weight renormalization and position sizing.

use std::collections::HashSet;

use log::debug;
use rust_decimal::Decimal;

use modelfolio_market_data::PriceTable;

use crate::errors::{Error, Result};
use crate::universe::Universe;

use super::allocation_model::{
    ExcludedSymbol, ExclusionReason, NormalizedAllocation, Position, SymbolWeight,
};

/// Restricts the universe's target weights to `enabled ∩ available`
/// and rescales them to sum to 1.
///
/// `available` is the set of symbols the price table actually holds.
/// Symbols lost in the restriction are recorded with their reason so
/// the caller can warn the user; they are never silently filtered.
///
/// Fails with [`Error::EmptySelection`] when nothing survives the
/// restriction or the surviving target weights sum to zero.
pub fn normalize_weights(
    universe: &Universe,
    enabled: &[String],
    available: &[String],
) -> Result<NormalizedAllocation> {
    let enabled_set: HashSet<&str> = enabled.iter().map(String::as_str).collect();
    let available_set: HashSet<&str> = available.iter().map(String::as_str).collect();

    let mut excluded: Vec<ExcludedSymbol> = enabled
        .iter()
        .filter(|s| !universe.contains(s))
        .map(|s| ExcludedSymbol {
            symbol: s.clone(),
            reason: ExclusionReason::NoTargetWeight,
        })
        .collect();

    let mut survivors = Vec::new();
    for meta in universe.iter() {
        if !enabled_set.contains(meta.symbol.as_str()) {
            continue;
        }
        if available_set.contains(meta.symbol.as_str()) {
            survivors.push(meta);
        } else {
            excluded.push(ExcludedSymbol {
                symbol: meta.symbol.clone(),
                reason: ExclusionReason::NoPriceData,
            });
        }
    }

    if survivors.is_empty() {
        return Err(Error::EmptySelection(
            "no enabled symbol has both a target weight and price data".to_string(),
        ));
    }

    let total: Decimal = survivors.iter().map(|m| m.target_weight_pct).sum();
    if total <= Decimal::ZERO {
        return Err(Error::EmptySelection(
            "enabled symbols have zero target weight".to_string(),
        ));
    }

    let weights = survivors
        .iter()
        .map(|m| SymbolWeight {
            symbol: m.symbol.clone(),
            weight: m.target_weight_pct / total,
        })
        .collect();

    debug!(
        "normalized {} weights, {} excluded",
        survivors.len(),
        excluded.len()
    );

    Ok(NormalizedAllocation { weights, excluded })
}

/// Sizes the fixed basket bought on the first covered date:
/// `shares = amount × weight / first_price`.
///
/// A zero amount yields all-zero share counts without error. A missing
/// or non-positive first price for any weighted symbol is an error;
/// position sizing never divides by an unusable price.
pub fn compute_positions(
    initial_amount: Decimal,
    allocation: &NormalizedAllocation,
    table: &PriceTable,
) -> Result<Vec<Position>> {
    let mut positions = Vec::with_capacity(allocation.weights.len());
    for entry in &allocation.weights {
        let first_price = table
            .first_price(&entry.symbol)
            .ok_or_else(|| Error::MissingPrice {
                symbol: entry.symbol.clone(),
            })?;
        if first_price <= Decimal::ZERO {
            return Err(Error::InvalidPrice {
                symbol: entry.symbol.clone(),
                price: first_price,
            });
        }
        positions.push(Position {
            symbol: entry.symbol.clone(),
            shares: initial_amount * entry.weight / first_price,
        });
    }
    Ok(positions)
}
