//! Allocation module: weight renormalization and position sizing.

mod allocation_calculator;
mod allocation_model;


pub use allocation_calculator::{compute_positions, normalize_weights};
pub use allocation_model::{
    ExcludedSymbol, ExclusionReason, NormalizedAllocation, Position, SymbolWeight,
};
