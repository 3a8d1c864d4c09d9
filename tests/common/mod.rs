//! Shared test fixtures for integration tests.

use solar_sizer::config::SystemConfig;
use solar_sizer::loads::{CircuitType, LoadRegistry};

/// Registry holding the reference single-appliance scenario:
/// one 100 W AC load running 5 h/day.
pub fn single_ac_load() -> LoadRegistry {
    let mut registry = LoadRegistry::new();
    registry.add("Test Load", 100.0, CircuitType::Ac, 1, 5.0);
    registry
}

/// Default parameters: 24 V, 5 days autonomy, DoD 0.70, PSH 4.5, 400 W panels.
pub fn default_params() -> SystemConfig {
    SystemConfig::default()
}

/// A mixed AC/DC registry exercising quantity and fractional hours.
pub fn mixed_loads() -> LoadRegistry {
    let mut registry = LoadRegistry::new();
    registry.add("Refrigerator", 150.0, CircuitType::Ac, 1, 8.0);
    registry.add("LED Lights", 10.0, CircuitType::Dc, 4, 6.0);
    registry.add("Water Pump", 750.0, CircuitType::Ac, 1, 0.5);
    registry.add("Phone Charger", 10.0, CircuitType::Dc, 2, 2.0);
    registry
}
