//! Portfolio engine module.
//!
//! - [`allocation`] - Weight renormalization and position sizing
//! - [`valuation`] - Daily mark-to-market trajectory and summary
//! - [`breakdown`] - Per-holding table grouped by asset class
//! - [`simulation_service`] - Orchestration of the full pipeline

pub mod allocation;
pub mod breakdown;
pub mod simulation_model;
pub mod simulation_service;
pub mod valuation;


pub use allocation::{
    ExcludedSymbol, ExclusionReason, NormalizedAllocation, Position, SymbolWeight,
};
pub use breakdown::{BreakdownGroup, BreakdownRow};
pub use simulation_model::{GrowthReport, SimulationRequest};
pub use simulation_service::{SimulationService, SimulationServiceTrait};
pub use valuation::{GrowthSummary, PortfolioPoint};
