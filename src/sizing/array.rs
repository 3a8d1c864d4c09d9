//! PV array sizing from the recommended battery bank.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SystemConfig;

use super::tables::panel_nominal_voltage;

/// Charge-path efficiency between array and battery (charge acceptance and
/// wiring losses).
const CHARGE_PATH_EFFICIENCY: f64 = 0.90;

/// PV array sizing with the series/parallel string layout.
///
/// The array is always rounded up to a whole number of complete series
/// strings, so delivered power is never below the derated requirement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArraySizing {
    /// Daily energy the array must replace, including charge losses (Wh).
    pub daily_pv_energy_wh: f64,
    /// Array power needed at ideal conditions (W).
    pub raw_array_power_w: f64,
    /// Array power inflated for derating losses (W).
    pub derated_array_power_w: f64,
    /// Panels needed to meet the derated power.
    pub panel_count: u32,
    /// Panels wired in series per string to reach the bus voltage.
    pub panels_per_string: u32,
    /// Parallel strings.
    pub strings: u32,
    /// Panels actually installed: `panels_per_string × strings`.
    pub total_panels: u32,
    /// Nameplate power of the installed array (W).
    pub total_array_power_w: f64,
}

impl ArraySizing {
    /// Sizes the array to recharge the recommended battery bank daily.
    pub fn from_battery(recommended_battery_ah: f64, params: &SystemConfig) -> Self {
        let pv_ah = recommended_battery_ah / CHARGE_PATH_EFFICIENCY;
        let daily_pv_energy_wh = pv_ah * params.voltage.volts();
        let raw_array_power_w = daily_pv_energy_wh / params.peak_sun_hours;
        let derated_array_power_w = raw_array_power_w / params.derating_factor;

        let panel_wattage = f64::from(params.panel_wattage);
        let panel_count = (derated_array_power_w / panel_wattage).ceil() as u32;

        let panels_per_string = (params.voltage.volts()
            / panel_nominal_voltage(params.panel_wattage))
        .ceil() as u32;
        let strings = panel_count.div_ceil(panels_per_string);
        let total_panels = panels_per_string * strings;
        let total_array_power_w = f64::from(total_panels) * panel_wattage;

        Self {
            daily_pv_energy_wh,
            raw_array_power_w,
            derated_array_power_w,
            panel_count,
            panels_per_string,
            strings,
            total_panels,
            total_array_power_w,
        }
    }

    /// Series × parallel layout, e.g. `"2S × 3P"`.
    pub fn string_config(&self) -> StringConfig {
        StringConfig {
            panels_per_string: self.panels_per_string,
            strings: self.strings,
        }
    }
}

/// Series/parallel string layout of the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringConfig {
    /// Panels wired in series per string.
    pub panels_per_string: u32,
    /// Parallel strings.
    pub strings: u32,
}

impl fmt::Display for StringConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}S × {}P", self.panels_per_string, self.strings)
    }
}
