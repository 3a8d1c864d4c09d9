//! Inverter sizing from instantaneous AC load.

use serde::{Deserialize, Serialize};

use crate::loads::{ApplianceLoad, CircuitType};

/// Continuous headroom factor over the simultaneous AC load.
const CONTINUOUS_MARGIN: f64 = 1.25;

/// Inverter ratings come in steps of this many volt-amps.
const RATING_STEP_VA: f64 = 100.0;

/// Surge capacity multiplier for motor and compressor inrush.
const SURGE_FACTOR: f64 = 2.5;

/// Inverter rating derived from raw instantaneous AC power, not energy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InverterSizing {
    /// Continuous rating (VA), a multiple of 100.
    pub rating_va: f64,
    /// Surge rating: `2.5 × rating_va` (VA).
    pub surge_va: f64,
}

impl InverterSizing {
    /// Sizes the inverter for the sum of `power_w × quantity` over AC loads.
    ///
    /// DC loads never pass through the inverter and are ignored here.
    pub fn from_loads(loads: &[ApplianceLoad]) -> Self {
        let total_ac_load_w: f64 = loads
            .iter()
            .filter(|l| l.circuit == CircuitType::Ac)
            .map(|l| l.power_w * f64::from(l.quantity))
            .sum();

        let rating_va = (total_ac_load_w * CONTINUOUS_MARGIN / RATING_STEP_VA).ceil()
            * RATING_STEP_VA;
        Self {
            rating_va,
            surge_va: rating_va * SURGE_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::LoadRegistry;

    #[test]
    fn single_100w_load_rounds_up_to_200va() {
        let mut reg = LoadRegistry::new();
        reg.add("Fridge", 100.0, CircuitType::Ac, 1, 5.0);
        let inv = InverterSizing::from_loads(reg.loads());
        assert_eq!(inv.rating_va, 200.0); // 125 VA → next 100 VA step
        assert_eq!(inv.surge_va, 500.0);
    }

    #[test]
    fn dc_loads_are_ignored() {
        let mut reg = LoadRegistry::new();
        reg.add("Lights", 500.0, CircuitType::Dc, 2, 6.0);
        let inv = InverterSizing::from_loads(reg.loads());
        assert_eq!(inv.rating_va, 0.0);
        assert_eq!(inv.surge_va, 0.0);
    }

    #[test]
    fn rating_uses_power_not_energy() {
        // Same power, wildly different hours — rating must not change.
        let mut a = LoadRegistry::new();
        a.add("Pump", 750.0, CircuitType::Ac, 1, 0.5);
        let mut b = LoadRegistry::new();
        b.add("Pump", 750.0, CircuitType::Ac, 1, 12.0);
        assert_eq!(
            InverterSizing::from_loads(a.loads()),
            InverterSizing::from_loads(b.loads())
        );
    }

    #[test]
    fn rating_is_always_a_100va_multiple_with_fixed_surge_ratio() {
        for watts in [1.0, 79.0, 80.0, 100.0, 333.0, 1234.0, 5000.0] {
            let mut reg = LoadRegistry::new();
            reg.add("Load", watts, CircuitType::Ac, 1, 4.0);
            let inv = InverterSizing::from_loads(reg.loads());
            assert_eq!(inv.rating_va % 100.0, 0.0, "off-grid rating for {watts} W");
            assert_eq!(inv.surge_va, inv.rating_va * 2.5);
            assert!(inv.rating_va >= watts * 1.25);
        }
    }

    #[test]
    fn quantity_multiplies_the_simultaneous_load() {
        let mut reg = LoadRegistry::new();
        reg.add("Fan", 75.0, CircuitType::Ac, 4, 8.0); // 300 W → 375 VA → 400 VA
        let inv = InverterSizing::from_loads(reg.loads());
        assert_eq!(inv.rating_va, 400.0);
    }
}
