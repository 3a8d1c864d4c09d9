//! Charge controller sizing from installed array power.

use serde::{Deserialize, Serialize};

use crate::config::SystemVoltage;

use super::tables::panel_open_circuit_voltage;

/// Current safety margin over the nominal array current.
const CURRENT_MARGIN: f64 = 1.25;

/// Controller current ratings come in steps of this many amps.
const CURRENT_STEP_A: f64 = 10.0;

/// Cold-weather factor applied to the panel open-circuit voltage.
const VOLTAGE_SAFETY_FACTOR: f64 = 1.2;

/// Charge controller current and voltage ratings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerSizing {
    /// Current rating (A), a multiple of 10.
    pub current_a: f64,
    /// Minimum voltage rating (V), covering cold-weather Voc rise.
    pub voltage_rating_v: f64,
}

impl ControllerSizing {
    /// Sizes the controller for the installed array at the bus voltage.
    pub fn from_array(
        total_array_power_w: f64,
        voltage: SystemVoltage,
        panel_wattage: u32,
    ) -> Self {
        let current_a = (total_array_power_w / voltage.volts() * CURRENT_MARGIN / CURRENT_STEP_A)
            .ceil()
            * CURRENT_STEP_A;
        let voltage_rating_v =
            (panel_open_circuit_voltage(panel_wattage) * VOLTAGE_SAFETY_FACTOR).ceil();
        Self {
            current_a,
            voltage_rating_v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_1600w_array_on_24v_bus() {
        // 1600 / 24 × 1.25 = 83.3 A → next 10 A step is 90 A.
        let ctl = ControllerSizing::from_array(1600.0, SystemVoltage::V24, 400);
        assert_eq!(ctl.current_a, 90.0);
        assert_eq!(ctl.voltage_rating_v, 58.0); // ceil(48 × 1.2)
    }

    #[test]
    fn voltage_rating_follows_the_panel_class() {
        let ctl = ControllerSizing::from_array(1600.0, SystemVoltage::V24, 300);
        assert_eq!(ctl.voltage_rating_v, 46.0); // ceil(38 × 1.2)
        let ctl = ControllerSizing::from_array(1600.0, SystemVoltage::V24, 550);
        assert_eq!(ctl.voltage_rating_v, 69.0); // ceil(57 × 1.2)
        let ctl = ControllerSizing::from_array(1600.0, SystemVoltage::V24, 500);
        assert_eq!(ctl.voltage_rating_v, 72.0); // fallback 60 V class
    }

    #[test]
    fn current_is_always_a_10a_multiple() {
        for watts in [0.0, 100.0, 480.0, 1600.0, 9999.0] {
            let ctl = ControllerSizing::from_array(watts, SystemVoltage::V48, 400);
            assert_eq!(ctl.current_a % 10.0, 0.0, "off-grid rating for {watts} W");
            assert!(ctl.current_a >= watts / 48.0 * 1.25);
        }
    }

    #[test]
    fn zero_array_needs_no_current_but_keeps_voltage_rating() {
        let ctl = ControllerSizing::from_array(0.0, SystemVoltage::V12, 400);
        assert_eq!(ctl.current_a, 0.0);
        assert_eq!(ctl.voltage_rating_v, 58.0);
    }
}
