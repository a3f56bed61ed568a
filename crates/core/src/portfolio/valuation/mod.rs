//! Valuation module: daily mark-to-market and summary metrics.

mod valuation_calculator;
mod valuation_model;

#[cfg(test)]
mod valuation_calculator_tests;

pub use valuation_calculator::{calculate_trajectory, summarize};
pub use valuation_model::{GrowthSummary, PortfolioPoint};
