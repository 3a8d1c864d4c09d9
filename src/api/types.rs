//! API response types.

use serde::Serialize;

use crate::loads::ApplianceLoad;
use crate::sizing::EnergyBreakdown;

/// One appliance row with its derived daily energy.
#[derive(Debug, Serialize)]
pub struct LoadRecord {
    /// Registry id.
    pub id: u64,
    /// Display label.
    pub name: String,
    /// `"AC"` or `"DC"`.
    pub circuit: String,
    /// Power draw per unit (W).
    pub power_w: f64,
    /// Count of identical units.
    pub quantity: u32,
    /// Usage duration per day (h).
    pub hours_per_day: f64,
    /// Derived daily energy (Wh).
    pub daily_wh: f64,
}

impl From<&ApplianceLoad> for LoadRecord {
    fn from(load: &ApplianceLoad) -> Self {
        Self {
            id: load.id.0,
            name: load.name.clone(),
            circuit: load.circuit.to_string(),
            power_w: load.power_w,
            quantity: load.quantity,
            hours_per_day: load.hours_per_day,
            daily_wh: load.daily_energy_wh(),
        }
    }
}

/// Response body for `/loads`: the entries plus the aggregate breakdown.
#[derive(Debug, Serialize)]
pub struct LoadsResponse {
    /// Appliance rows.
    pub loads: Vec<LoadRecord>,
    /// Aggregate daily energy by circuit.
    pub energy: EnergyBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::{CircuitType, LoadRegistry};

    #[test]
    fn load_record_maps_fields_and_derived_energy() {
        let mut reg = LoadRegistry::new();
        let id = reg.add("Fridge", 150.0, CircuitType::Ac, 1, 8.0);
        let record = LoadRecord::from(reg.get(id).expect("entry should exist"));

        assert_eq!(record.id, id.0);
        assert_eq!(record.name, "Fridge");
        assert_eq!(record.circuit, "AC");
        assert_eq!(record.daily_wh, 1200.0);
    }
}
