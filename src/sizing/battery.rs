//! Battery bank sizing from daily energy demand.

use serde::{Deserialize, Serialize};

use crate::config::SystemConfig;

/// Battery banks come in discrete increments of this many amp-hours.
const BANK_STEP_AH: f64 = 50.0;

/// Safety margin applied on top of the minimum bank size.
const SAFETY_MARGIN: f64 = 1.10;

/// Battery bank sizing chain, each step feeding the next.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatterySizing {
    /// Daily amp-hour draw at the system bus voltage (Ah).
    pub daily_ah: f64,
    /// Amp-hours needed to ride through the configured autonomy days (Ah).
    pub autonomy_ah: f64,
    /// Autonomy requirement inflated for usable depth of discharge (Ah).
    pub dod_adjusted_ah: f64,
    /// Minimum bank size, rounded up to the 50 Ah grid (Ah).
    pub min_battery_ah: f64,
    /// Minimum plus a 10% margin, re-rounded up to the 50 Ah grid (Ah).
    pub recommended_battery_ah: f64,
}

impl BatterySizing {
    /// Sizes the battery bank for the given total daily demand.
    ///
    /// Dividing by depth of discharge inflates the requirement because only
    /// a DoD-fraction of nominal capacity is usable. A zero DoD is rejected
    /// at the configuration boundary and never reaches this stage.
    pub fn from_demand(total_wh: f64, params: &SystemConfig) -> Self {
        let daily_ah = total_wh / params.voltage.volts();
        let autonomy_ah = daily_ah * f64::from(params.autonomy_days);
        let dod_adjusted_ah = autonomy_ah / params.depth_of_discharge;
        let min_battery_ah = ceil_to_step(dod_adjusted_ah, BANK_STEP_AH);
        let recommended_battery_ah = ceil_to_step(min_battery_ah * SAFETY_MARGIN, BANK_STEP_AH);
        Self {
            daily_ah,
            autonomy_ah,
            dod_adjusted_ah,
            min_battery_ah,
            recommended_battery_ah,
        }
    }
}

/// Rounds `value` up to the next multiple of `step`.
fn ceil_to_step(value: f64, step: f64) -> f64 {
    (value / step).ceil() * step
}
