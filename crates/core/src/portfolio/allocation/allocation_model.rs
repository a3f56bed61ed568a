//! Allocation domain models.

use rust_decimal::Decimal;
use serde::Serialize;

/// Why a symbol was left out of the normalized allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExclusionReason {
    /// Enabled and configured, but the provider had no data at all for
    /// it in the requested range.
    NoPriceData,
    /// Enabled, but not present in the configured universe.
    NoTargetWeight,
}

impl ExclusionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExclusionReason::NoPriceData => "no price data for the chosen dates",
            ExclusionReason::NoTargetWeight => "no target weight configured",
        }
    }
}

/// A symbol excluded during renormalization, surfaced for user-facing
/// warnings rather than silently filtered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcludedSymbol {
    pub symbol: String,
    pub reason: ExclusionReason,
}

/// One renormalized weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolWeight {
    pub symbol: String,
    /// Fraction in [0, 1]; all weights of an allocation sum to 1
    pub weight: Decimal,
}

/// Target weights restricted to the held symbols and rescaled to sum
/// to 1, plus the exclusions that restriction produced.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAllocation {
    /// Weights in universe configuration order
    pub weights: Vec<SymbolWeight>,
    pub excluded: Vec<ExcludedSymbol>,
}

impl NormalizedAllocation {
    pub fn weight(&self, symbol: &str) -> Option<Decimal> {
        self.weights
            .iter()
            .find(|w| w.symbol == symbol)
            .map(|w| w.weight)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.weights.iter().map(|w| w.symbol.as_str())
    }
}

/// A fixed basket entry: shares bought on day one and never traded
/// again. Value fluctuates only with market price.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub symbol: String,
    pub shares: Decimal,
}
