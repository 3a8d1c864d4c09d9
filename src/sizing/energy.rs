//! Daily energy aggregation over the appliance list.

use serde::{Deserialize, Serialize};

use crate::loads::{ApplianceLoad, CircuitType};

/// Daily energy demand, partitioned by circuit type.
///
/// `total_wh` is defined as `dc_wh + ac_wh`, so the partition always sums
/// exactly. No rounding is applied at this stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    /// Total daily energy demand (Wh).
    pub total_wh: f64,
    /// Daily energy drawn by DC loads (Wh).
    pub dc_wh: f64,
    /// Daily energy drawn by AC loads (Wh).
    pub ac_wh: f64,
}

impl EnergyBreakdown {
    /// Sums per-appliance daily energy over all loads.
    ///
    /// An empty list yields all zeros.
    pub fn from_loads(loads: &[ApplianceLoad]) -> Self {
        let mut dc_wh = 0.0;
        let mut ac_wh = 0.0;
        for load in loads {
            match load.circuit {
                CircuitType::Dc => dc_wh += load.daily_energy_wh(),
                CircuitType::Ac => ac_wh += load.daily_energy_wh(),
            }
        }
        Self {
            total_wh: dc_wh + ac_wh,
            dc_wh,
            ac_wh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::LoadRegistry;

    #[test]
    fn empty_list_yields_zeros() {
        let energy = EnergyBreakdown::from_loads(&[]);
        assert_eq!(energy.total_wh, 0.0);
        assert_eq!(energy.dc_wh, 0.0);
        assert_eq!(energy.ac_wh, 0.0);
    }

    #[test]
    fn partitions_by_circuit() {
        let mut reg = LoadRegistry::new();
        reg.add("Fridge", 150.0, CircuitType::Ac, 1, 8.0); // 1200 Wh
        reg.add("Lights", 10.0, CircuitType::Dc, 4, 6.0); // 240 Wh
        reg.add("TV", 120.0, CircuitType::Ac, 1, 4.0); // 480 Wh

        let energy = EnergyBreakdown::from_loads(reg.loads());
        assert_eq!(energy.ac_wh, 1680.0);
        assert_eq!(energy.dc_wh, 240.0);
        assert_eq!(energy.total_wh, 1920.0);
    }

    #[test]
    fn total_is_exactly_the_partition_sum() {
        let mut reg = LoadRegistry::new();
        reg.add("A", 33.3, CircuitType::Ac, 3, 7.7);
        reg.add("B", 0.1, CircuitType::Dc, 7, 11.9);
        reg.add("C", 19.99, CircuitType::Ac, 2, 0.25);

        let energy = EnergyBreakdown::from_loads(reg.loads());
        assert_eq!(energy.total_wh, energy.dc_wh + energy.ac_wh);
    }

    #[test]
    fn quantity_scales_energy() {
        let mut reg = LoadRegistry::new();
        reg.add("Lights", 10.0, CircuitType::Dc, 6, 5.0);
        let energy = EnergyBreakdown::from_loads(reg.loads());
        assert_eq!(energy.total_wh, 300.0);
    }
}
