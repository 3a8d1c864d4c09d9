//! Fixed lookup tables for panel electrical classes and battery pricing.
//!
//! Modeled as explicit finite maps with a defined fallback branch so that
//! adding a panel or chemistry class is a data change, not a code change.

use crate::config::BatteryChemistry;

/// Approximate nominal operating voltage (V) for a panel wattage class.
///
/// Rows: 300 W → 32 V, 400 W → 40 V, 550 W → 49 V. Unlisted wattages take
/// the 50 V fallback; extend the table rather than guess.
pub fn panel_nominal_voltage(panel_wattage: u32) -> f64 {
    match panel_wattage {
        300 => 32.0,
        400 => 40.0,
        550 => 49.0,
        _ => 50.0,
    }
}

/// Open-circuit voltage (V) for a panel wattage class.
///
/// Rows: 300 W → 38 V, 400 W → 48 V, 550 W → 57 V, fallback 60 V.
pub fn panel_open_circuit_voltage(panel_wattage: u32) -> f64 {
    match panel_wattage {
        300 => 38.0,
        400 => 48.0,
        550 => 57.0,
        _ => 60.0,
    }
}

/// Battery bank price (USD per kWh of nominal capacity) by chemistry.
pub fn battery_cost_per_kwh(chemistry: BatteryChemistry) -> f64 {
    match chemistry {
        BatteryChemistry::Lifepo4 => 300.0,
        BatteryChemistry::Lithium => 250.0,
        BatteryChemistry::Leadacid => 100.0,
    }
}
