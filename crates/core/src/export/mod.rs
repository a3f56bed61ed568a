//! CSV export of the result tables.

mod export_service;


pub use export_service::{write_breakdown_csv, write_trajectory_csv};
