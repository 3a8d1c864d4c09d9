//! Hardware cost estimate and savings economics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SystemConfig;

use super::array::ArraySizing;
use super::battery::BatterySizing;
use super::controller::ControllerSizing;
use super::energy::EnergyBreakdown;
use super::inverter::InverterSizing;
use super::tables::battery_cost_per_kwh;

/// Panel price (USD per installed watt).
const PANEL_COST_PER_W: f64 = 0.50;

/// Inverter price (USD per VA of continuous rating).
const INVERTER_COST_PER_VA: f64 = 0.30;

/// Charge controller price (USD per amp of rating).
const CONTROLLER_COST_PER_A: f64 = 5.0;

/// Mounting, wiring, and ancillary hardware as a share of component cost.
const BOS_MARKUP: f64 = 0.20;

/// Billing month length used for the savings estimate (days).
const BILLING_MONTH_DAYS: f64 = 30.0;

/// Assumed system service life (years).
const SYSTEM_LIFE_YEARS: f64 = 25.0;

/// Payback period, with an explicit no-payback state.
///
/// Zero annual savings never produce a non-finite number; they produce
/// [`Payback::Never`], which renders as `"no payback"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payback {
    /// The system pays for itself after this many years.
    Years(f64),
    /// Savings are zero; the system never pays for itself.
    Never,
}

impl Default for Payback {
    fn default() -> Self {
        Self::Never
    }
}

impl fmt::Display for Payback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Years(years) => write!(f, "{years:.1} years"),
            Self::Never => write!(f, "no payback"),
        }
    }
}

/// Itemized cost estimate and savings economics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    /// Panel cost at $0.50/W of installed array (USD).
    pub panel_cost_usd: f64,
    /// Battery bank cost by chemistry price per kWh (USD).
    pub battery_cost_usd: f64,
    /// Inverter cost at $0.30/VA (USD).
    pub inverter_cost_usd: f64,
    /// Charge controller cost at $5/A (USD).
    pub controller_cost_usd: f64,
    /// Mounting and wiring at 20% of component cost (USD).
    pub mounting_cost_usd: f64,
    /// Hardware plus mounting (USD).
    pub total_cost_usd: f64,
    /// Offset grid spend per 30-day month (USD).
    pub monthly_savings_usd: f64,
    /// Twelve billing months of savings (USD).
    pub annual_savings_usd: f64,
    /// Years until savings cover the total cost.
    pub payback: Payback,
    /// Savings over the 25-year system life, net of the total cost (USD).
    pub lifetime_savings_usd: f64,
}

impl CostEstimate {
    /// Prices the designed system and derives the savings economics.
    pub fn from_sizing(
        energy: &EnergyBreakdown,
        battery: &BatterySizing,
        array: &ArraySizing,
        inverter: &InverterSizing,
        controller: &ControllerSizing,
        params: &SystemConfig,
    ) -> Self {
        let panel_cost_usd = array.total_array_power_w * PANEL_COST_PER_W;

        let battery_kwh = battery.recommended_battery_ah * params.voltage.volts() / 1000.0;
        let battery_cost_usd = battery_kwh * battery_cost_per_kwh(params.battery_chemistry);

        let inverter_cost_usd = inverter.rating_va * INVERTER_COST_PER_VA;
        let controller_cost_usd = controller.current_a * CONTROLLER_COST_PER_A;

        let hardware_cost_usd =
            panel_cost_usd + battery_cost_usd + inverter_cost_usd + controller_cost_usd;
        let mounting_cost_usd = hardware_cost_usd * BOS_MARKUP;
        let total_cost_usd = hardware_cost_usd + mounting_cost_usd;

        let daily_kwh = energy.total_wh / 1000.0;
        let monthly_savings_usd =
            daily_kwh * BILLING_MONTH_DAYS * params.electricity_rate_usd_per_kwh;
        let annual_savings_usd = monthly_savings_usd * 12.0;
        let payback = if annual_savings_usd > 0.0 {
            Payback::Years(total_cost_usd / annual_savings_usd)
        } else {
            Payback::Never
        };
        let lifetime_savings_usd = annual_savings_usd * SYSTEM_LIFE_YEARS - total_cost_usd;

        Self {
            panel_cost_usd,
            battery_cost_usd,
            inverter_cost_usd,
            controller_cost_usd,
            mounting_cost_usd,
            total_cost_usd,
            monthly_savings_usd,
            annual_savings_usd,
            payback,
            lifetime_savings_usd,
        }
    }
}
