//! Off-grid solar power system sizing calculator.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
pub mod io;
pub mod loads;
pub mod location;
pub mod project;
pub mod report;
/// Sizing chain: energy, battery, array, inverter, controller, and cost stages.
pub mod sizing;
