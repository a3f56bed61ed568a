//! Breakdown module: the per-holding detail table.

mod breakdown_calculator;
mod breakdown_model;

#[cfg(test)]
mod breakdown_calculator_tests;

pub use breakdown_calculator::build_breakdown;
pub use breakdown_model::{BreakdownGroup, BreakdownRow};
