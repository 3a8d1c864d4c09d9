//! The sizing engine: a pure recomputation pipeline over loads and parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SystemConfig;
use crate::loads::ApplianceLoad;

use super::array::ArraySizing;
use super::battery::BatterySizing;
use super::controller::ControllerSizing;
use super::cost::CostEstimate;
use super::energy::EnergyBreakdown;
use super::inverter::InverterSizing;

/// Complete sizing output, recomputed wholesale on every change.
///
/// Always a pure function of the current loads and parameters — no hidden
/// accumulation, no history dependency, never partially stale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SizingResults {
    /// Daily energy demand by circuit.
    pub energy: EnergyBreakdown,
    /// Battery bank sizing chain.
    pub battery: BatterySizing,
    /// PV array sizing and string layout.
    pub array: ArraySizing,
    /// Inverter continuous and surge ratings.
    pub inverter: InverterSizing,
    /// Charge controller ratings.
    pub controller: ControllerSizing,
    /// Itemized costs and savings economics.
    pub cost: CostEstimate,
}

/// Runs the full sizing chain in its fixed order.
///
/// Each stage consumes the prior stage's output: energy → battery → array →
/// (inverter from the raw AC loads) → controller → cost. Deterministic and
/// side-effect-free; identical inputs yield bit-identical results.
pub fn recalculate(loads: &[ApplianceLoad], params: &SystemConfig) -> SizingResults {
    let energy = EnergyBreakdown::from_loads(loads);
    let battery = BatterySizing::from_demand(energy.total_wh, params);
    let array = ArraySizing::from_battery(battery.recommended_battery_ah, params);
    let inverter = InverterSizing::from_loads(loads);
    let controller = ControllerSizing::from_array(
        array.total_array_power_w,
        params.voltage,
        params.panel_wattage,
    );
    let cost = CostEstimate::from_sizing(&energy, &battery, &array, &inverter, &controller, params);

    SizingResults {
        energy,
        battery,
        array,
        inverter,
        controller,
        cost,
    }
}

impl fmt::Display for SizingResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- System Sizing ---")?;
        writeln!(
            f,
            "Daily energy:       {:.0} Wh (AC {:.0} Wh, DC {:.0} Wh)",
            self.energy.total_wh, self.energy.ac_wh, self.energy.dc_wh
        )?;
        writeln!(
            f,
            "Battery bank:       {:.0} Ah (minimum {:.0} Ah)",
            self.battery.recommended_battery_ah, self.battery.min_battery_ah
        )?;
        writeln!(
            f,
            "PV array:           {:.0} W ({} × {:.0} W, {})",
            self.array.total_array_power_w,
            self.array.total_panels,
            if self.array.total_panels > 0 {
                self.array.total_array_power_w / f64::from(self.array.total_panels)
            } else {
                0.0
            },
            self.array.string_config()
        )?;
        writeln!(
            f,
            "Inverter:           {:.0} VA (surge {:.0} VA)",
            self.inverter.rating_va, self.inverter.surge_va
        )?;
        writeln!(
            f,
            "Charge controller:  {:.0} A, {:.0} V rating",
            self.controller.current_a, self.controller.voltage_rating_v
        )?;
        write!(
            f,
            "Total cost:         ${:.0} (payback {})",
            self.cost.total_cost_usd, self.cost.payback
        )
    }
}
