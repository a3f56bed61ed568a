//! Service orchestrating one full simulation pass.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;

use modelfolio_market_data::{PriceProvider, PriceTable};

use crate::errors::{Error, Result};
use crate::portfolio::allocation::{compute_positions, normalize_weights};
use crate::portfolio::breakdown::build_breakdown;
use crate::portfolio::valuation::{calculate_trajectory, summarize};
use crate::universe::Universe;

use super::simulation_model::{GrowthReport, SimulationRequest};

/// Trait for the simulation service.
#[async_trait]
pub trait SimulationServiceTrait: Send + Sync {
    /// Runs the whole pipeline for one request: fetch prices, build
    /// the dense table, renormalize weights, size the basket, mark to
    /// market and assemble the report.
    async fn simulate(
        &self,
        universe: &Universe,
        request: &SimulationRequest,
    ) -> Result<GrowthReport>;
}

/// Buy-and-hold growth simulation over a configured universe.
///
/// Holds no state between invocations; concurrent calls with
/// different inputs never interfere. The provider behind the trait
/// may memoize its fetches.
pub struct SimulationService {
    provider: Arc<dyn PriceProvider>,
}

impl SimulationService {
    pub fn new(provider: Arc<dyn PriceProvider>) -> Self {
        Self { provider }
    }

    fn validate(&self, request: &SimulationRequest) -> Result<()> {
        if request.start_date > request.end_date {
            return Err(Error::InvalidDateRange {
                start: request.start_date,
                end: request.end_date,
            });
        }
        if request.initial_amount < Decimal::ZERO {
            return Err(Error::InvalidAmount(request.initial_amount));
        }
        if request.enabled_symbols.is_empty() {
            return Err(Error::EmptySelection("no symbols enabled".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SimulationServiceTrait for SimulationService {
    async fn simulate(
        &self,
        universe: &Universe,
        request: &SimulationRequest,
    ) -> Result<GrowthReport> {
        debug!(
            "simulating {} from {} to {} over {} enabled symbols",
            request.initial_amount,
            request.start_date,
            request.end_date,
            request.enabled_symbols.len()
        );

        // 1. Validate the request before any I/O
        self.validate(request)?;

        // 2. Only configured symbols are worth fetching; the rest are
        //    reported by normalize_weights as unconfigured
        let fetch_list: Vec<String> = universe
            .symbols()
            .into_iter()
            .filter(|s| request.enabled_symbols.contains(s))
            .collect();
        if fetch_list.is_empty() {
            return Err(Error::EmptySelection(
                "none of the enabled symbols is configured in the universe".to_string(),
            ));
        }

        // 3. Fetch and densify
        let quotes = self
            .provider
            .daily_closes(&fetch_list, request.start_date, request.end_date)
            .await?;
        let table = PriceTable::from_quotes(&fetch_list, quotes)?;
        if !table.missing_symbols().is_empty() {
            warn!(
                "no price data for: {}",
                table.missing_symbols().join(", ")
            );
        }

        // 4. Renormalize, size the basket, mark to market
        let allocation =
            normalize_weights(universe, &request.enabled_symbols, table.symbols())?;
        let positions = compute_positions(request.initial_amount, &allocation, &table)?;
        let trajectory = calculate_trajectory(&positions, &table);
        let summary = summarize(&trajectory).ok_or_else(|| {
            Error::EmptySelection("no trading days in the requested range".to_string())
        })?;

        // 5. Detail table
        let breakdown = build_breakdown(universe, &allocation, &positions, &table);

        Ok(GrowthReport {
            summary,
            trajectory,
            breakdown,
            positions,
            excluded: allocation.excluded,
        })
    }
}
