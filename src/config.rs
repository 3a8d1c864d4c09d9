//! TOML-based design configuration, defaults, presets, and boundary validation.
//!
//! All parameter validation happens here; the sizing chain assumes
//! pre-validated input. Rejected values never replace the last valid ones.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loads::{CircuitType, LoadRegistry};

/// Supported system bus voltages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SystemVoltage {
    /// 12 V bus, small DC-heavy systems.
    V12,
    /// 24 V bus.
    #[default]
    V24,
    /// 48 V bus, larger arrays.
    V48,
}

impl SystemVoltage {
    /// Bus voltage as a number.
    pub fn volts(self) -> f64 {
        f64::from(u32::from(self))
    }
}

impl TryFrom<u32> for SystemVoltage {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            12 => Ok(Self::V12),
            24 => Ok(Self::V24),
            48 => Ok(Self::V48),
            other => Err(format!(
                "unsupported system voltage {other}, expected 12, 24, or 48"
            )),
        }
    }
}

impl From<SystemVoltage> for u32 {
    fn from(value: SystemVoltage) -> Self {
        match value {
            SystemVoltage::V12 => 12,
            SystemVoltage::V24 => 24,
            SystemVoltage::V48 => 48,
        }
    }
}

impl fmt::Display for SystemVoltage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}V", u32::from(*self))
    }
}

/// Battery chemistry, which drives the bank price per kWh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatteryChemistry {
    /// Lithium iron phosphate.
    #[default]
    Lifepo4,
    /// Lithium-ion.
    Lithium,
    /// Flooded or sealed lead-acid.
    Leadacid,
}

impl BatteryChemistry {
    /// Human-readable chemistry label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Lifepo4 => "LiFePO4",
            Self::Lithium => "Lithium-ion",
            Self::Leadacid => "Lead-Acid",
        }
    }
}

/// Panel cell technology. Report-only; the electrical tables key on wattage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelTechnology {
    /// Monocrystalline.
    #[default]
    Mono,
    /// Polycrystalline.
    Poly,
}

impl fmt::Display for PanelTechnology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mono => write!(f, "mono"),
            Self::Poly => write!(f, "poly"),
        }
    }
}

/// System configuration knobs, one field per parameter, all with defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SystemConfig {
    /// System bus voltage (12, 24, or 48).
    pub voltage: SystemVoltage,
    /// Days the battery bank must carry the load without sun (must be >= 1).
    pub autonomy_days: u32,
    /// Usable fraction of nominal battery capacity (must be in (0, 1]).
    pub depth_of_discharge: f64,
    /// Battery chemistry.
    pub battery_chemistry: BatteryChemistry,
    /// Equivalent full-sun hours per day (must be > 0).
    pub peak_sun_hours: f64,
    /// Nameplate wattage of one panel (must be > 0).
    pub panel_wattage: u32,
    /// Panel cell technology.
    pub panel_technology: PanelTechnology,
    /// Multiplier for temperature, soiling, and wiring losses (in (0, 1]).
    pub derating_factor: f64,
    /// Grid electricity price (USD/kWh, must be >= 0).
    pub electricity_rate_usd_per_kwh: f64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            voltage: SystemVoltage::V24,
            autonomy_days: 5,
            depth_of_discharge: 0.70,
            battery_chemistry: BatteryChemistry::Lifepo4,
            peak_sun_hours: 4.5,
            panel_wattage: 400,
            panel_technology: PanelTechnology::Mono,
            derating_factor: 0.85,
            electricity_rate_usd_per_kwh: 0.15,
        }
    }
}

/// One appliance entry as written in the TOML design file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplianceConfig {
    /// Display label.
    pub name: String,
    /// Power draw per unit (W).
    pub power_w: f64,
    /// AC or DC circuit.
    #[serde(default = "default_circuit")]
    pub circuit: CircuitType,
    /// Count of identical units.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Usage duration per day (h).
    #[serde(default)]
    pub hours_per_day: f64,
}

fn default_circuit() -> CircuitType {
    CircuitType::Ac
}

fn default_quantity() -> u32 {
    1
}

/// Top-level design configuration parsed from TOML.
///
/// Load from TOML with [`DesignConfig::from_toml_file`] or use a named
/// preset via [`DesignConfig::from_preset`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesignConfig {
    /// System parameters.
    pub system: SystemConfig,
    /// Appliance load entries.
    pub appliances: Vec<ApplianceConfig>,
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"system.depth_of_discharge"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl DesignConfig {
    /// Returns the blank design: default parameters, no appliances.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Returns the cabin preset: a small weekend cabin on the default 24 V bus.
    pub fn cabin() -> Self {
        Self {
            system: SystemConfig::default(),
            appliances: vec![
                appliance("LED Lights", 10.0, CircuitType::Dc, 4, 6.0),
                appliance("Refrigerator", 150.0, CircuitType::Ac, 1, 8.0),
                appliance("Laptop", 65.0, CircuitType::Ac, 1, 4.0),
                appliance("Water Pump", 750.0, CircuitType::Ac, 1, 0.5),
                appliance("Phone Charger", 10.0, CircuitType::Dc, 2, 2.0),
            ],
        }
    }

    /// Returns the homestead preset: a full-time household on a 48 V bus.
    pub fn homestead() -> Self {
        Self {
            system: SystemConfig {
                voltage: SystemVoltage::V48,
                autonomy_days: 3,
                panel_wattage: 550,
                ..SystemConfig::default()
            },
            appliances: vec![
                appliance("Fridge/Freezer", 200.0, CircuitType::Ac, 1, 10.0),
                appliance("Well Pump", 1100.0, CircuitType::Ac, 1, 1.5),
                appliance("LED Lights", 10.0, CircuitType::Dc, 8, 6.0),
                appliance("Washing Machine", 500.0, CircuitType::Ac, 1, 0.75),
                appliance("Television", 120.0, CircuitType::Ac, 1, 4.0),
                appliance("Ceiling Fans", 75.0, CircuitType::Ac, 3, 8.0),
            ],
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["blank", "cabin", "homestead"];

    /// Loads a design from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "blank" => Ok(Self::blank()),
            "cabin" => Ok(Self::cabin()),
            "homestead" => Ok(Self::homestead()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a design from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a design from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid. Division-prone
    /// parameters (depth of discharge, peak sun hours, derating) are rejected
    /// here so the sizing chain never sees a zero divisor.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let s = &self.system;

        if s.autonomy_days == 0 {
            errors.push(ConfigError {
                field: "system.autonomy_days".into(),
                message: "must be >= 1".into(),
            });
        }
        if !(s.depth_of_discharge > 0.0 && s.depth_of_discharge <= 1.0) {
            errors.push(ConfigError {
                field: "system.depth_of_discharge".into(),
                message: format!("must be in (0, 1], got {}", s.depth_of_discharge),
            });
        }
        if !(s.peak_sun_hours > 0.0) || !s.peak_sun_hours.is_finite() {
            errors.push(ConfigError {
                field: "system.peak_sun_hours".into(),
                message: format!("must be > 0, got {}", s.peak_sun_hours),
            });
        }
        if s.panel_wattage == 0 {
            errors.push(ConfigError {
                field: "system.panel_wattage".into(),
                message: "must be > 0".into(),
            });
        }
        if !(s.derating_factor > 0.0 && s.derating_factor <= 1.0) {
            errors.push(ConfigError {
                field: "system.derating_factor".into(),
                message: format!("must be in (0, 1], got {}", s.derating_factor),
            });
        }
        if !(s.electricity_rate_usd_per_kwh >= 0.0) || !s.electricity_rate_usd_per_kwh.is_finite() {
            errors.push(ConfigError {
                field: "system.electricity_rate_usd_per_kwh".into(),
                message: format!("must be >= 0, got {}", s.electricity_rate_usd_per_kwh),
            });
        }

        for (i, a) in self.appliances.iter().enumerate() {
            if a.name.trim().is_empty() {
                errors.push(ConfigError {
                    field: format!("appliances[{i}].name"),
                    message: "must not be empty".into(),
                });
            }
            if !(a.power_w >= 0.0) || !a.power_w.is_finite() {
                errors.push(ConfigError {
                    field: format!("appliances[{i}].power_w"),
                    message: format!("must be >= 0, got {}", a.power_w),
                });
            }
            if a.quantity == 0 {
                errors.push(ConfigError {
                    field: format!("appliances[{i}].quantity"),
                    message: "must be >= 1".into(),
                });
            }
            // Hours above 24 are deliberately not rejected; only the sign is.
            if !(a.hours_per_day >= 0.0) || !a.hours_per_day.is_finite() {
                errors.push(ConfigError {
                    field: format!("appliances[{i}].hours_per_day"),
                    message: format!("must be >= 0, got {}", a.hours_per_day),
                });
            }
        }

        errors
    }

    /// Builds a load registry from the configured appliance entries.
    pub fn build_registry(&self) -> LoadRegistry {
        let mut registry = LoadRegistry::new();
        for a in &self.appliances {
            registry.add(
                a.name.clone(),
                a.power_w,
                a.circuit,
                a.quantity,
                a.hours_per_day,
            );
        }
        registry
    }
}

fn appliance(
    name: &str,
    power_w: f64,
    circuit: CircuitType,
    quantity: u32,
    hours_per_day: f64,
) -> ApplianceConfig {
    ApplianceConfig {
        name: name.to_string(),
        power_w,
        circuit,
        quantity,
        hours_per_day,
    }
}
