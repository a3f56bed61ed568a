//! Price provider implementations.
//!
//! - [`traits`] - The `PriceProvider` trait all data sources implement
//! - [`yahoo`] - Yahoo Finance provider

mod traits;
mod yahoo;

pub use traits::PriceProvider;
pub use yahoo::YahooProvider;
