//! Universe domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Asset class used to group breakdown rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetClass {
    Equity,
    FixedIncome,
    Cash,
    Other,
}

impl AssetClass {
    /// Display order of breakdown sections.
    pub const ORDERED: [AssetClass; 4] = [
        AssetClass::Equity,
        AssetClass::FixedIncome,
        AssetClass::Cash,
        AssetClass::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Equity => "Equity",
            AssetClass::FixedIncome => "Fixed Income",
            AssetClass::Cash => "Cash",
            AssetClass::Other => "Other",
        }
    }
}

/// Static configuration for one security in the model allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityMeta {
    /// Ticker symbol
    pub symbol: String,
    /// Display name
    pub name: String,
    /// Target weight in percent of the full model (non-negative;
    /// the full universe sums to ~100)
    pub target_weight_pct: Decimal,
    /// Section the security belongs to in the breakdown
    pub asset_class: AssetClass,
}

/// Immutable ordered collection of [`SecurityMeta`], unique by symbol.
#[derive(Debug, Clone)]
pub struct Universe {
    securities: Vec<SecurityMeta>,
}

impl Universe {
    /// Builds a universe, rejecting duplicate symbols and negative
    /// target weights.
    pub fn new(securities: Vec<SecurityMeta>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for meta in &securities {
            if meta.symbol.trim().is_empty() {
                return Err(Error::InvalidUniverse("empty symbol".to_string()));
            }
            if !seen.insert(meta.symbol.clone()) {
                return Err(Error::InvalidUniverse(format!(
                    "duplicate symbol '{}'",
                    meta.symbol
                )));
            }
            if meta.target_weight_pct < Decimal::ZERO {
                return Err(Error::InvalidUniverse(format!(
                    "negative target weight for '{}': {}",
                    meta.symbol, meta.target_weight_pct
                )));
            }
        }
        Ok(Self { securities })
    }

    /// Parses a universe from a JSON array of securities.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let securities: Vec<SecurityMeta> = serde_json::from_str(json)?;
        Self::new(securities)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SecurityMeta> {
        self.securities.iter()
    }

    /// Symbols in configuration order.
    pub fn symbols(&self) -> Vec<String> {
        self.securities.iter().map(|m| m.symbol.clone()).collect()
    }

    pub fn get(&self, symbol: &str) -> Option<&SecurityMeta> {
        self.securities.iter().find(|m| m.symbol == symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    pub fn len(&self) -> usize {
        self.securities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.securities.is_empty()
    }
}
