//! File export helpers.

/// CSV export of the appliance load breakdown.
pub mod export;
