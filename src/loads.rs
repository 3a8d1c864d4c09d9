//! Appliance load entries, the registry that owns them, and quick-pick templates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for an appliance load, assigned by the registry at
/// creation and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadId(pub u64);

impl fmt::Display for LoadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Circuit an appliance is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CircuitType {
    /// Alternating current, supplied through the inverter.
    Ac,
    /// Direct current, supplied straight off the battery bus.
    Dc,
}

impl fmt::Display for CircuitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ac => write!(f, "AC"),
            Self::Dc => write!(f, "DC"),
        }
    }
}

/// One electrical load entry.
///
/// Mutated in place when quantity or hours are edited; owned exclusively by
/// the [`LoadRegistry`]. The sizing chain only ever reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceLoad {
    /// Registry-assigned identifier.
    pub id: LoadId,
    /// Display label (non-empty).
    pub name: String,
    /// Real power draw per unit (W, >= 0).
    pub power_w: f64,
    /// AC or DC circuit.
    pub circuit: CircuitType,
    /// Count of identical units (>= 1 when entered; 0 is tolerated downstream).
    pub quantity: u32,
    /// Usage duration per day (h, >= 0; values above 24 are the caller's call).
    pub hours_per_day: f64,
}

impl ApplianceLoad {
    /// Daily energy consumed by this entry: `power_w × quantity × hours_per_day`.
    pub fn daily_energy_wh(&self) -> f64 {
        self.power_w * f64::from(self.quantity) * self.hours_per_day
    }
}

/// Ordered collection of appliance loads with CRUD operations.
///
/// Holds no sizing logic. Ids are monotonically increasing and never reused
/// within a registry's lifetime.
#[derive(Debug, Clone, Default)]
pub struct LoadRegistry {
    loads: Vec<ApplianceLoad>,
    next_id: u64,
}

impl LoadRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a registry around previously persisted loads.
    ///
    /// The id counter resumes above the highest id present, so later
    /// additions never collide with restored entries.
    pub fn from_loads(loads: Vec<ApplianceLoad>) -> Self {
        let next_id = loads.iter().map(|l| l.id.0 + 1).max().unwrap_or(0);
        Self { loads, next_id }
    }

    /// Adds a load entry and returns its assigned id.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        power_w: f64,
        circuit: CircuitType,
        quantity: u32,
        hours_per_day: f64,
    ) -> LoadId {
        let id = LoadId(self.next_id);
        self.next_id += 1;
        self.loads.push(ApplianceLoad {
            id,
            name: name.into(),
            power_w,
            circuit,
            quantity,
            hours_per_day,
        });
        id
    }

    /// Adds a quick-pick template by name (quantity 1).
    ///
    /// # Errors
    ///
    /// Returns an error naming the available templates if `name` is unknown.
    pub fn add_template(&mut self, name: &str) -> Result<LoadId, String> {
        let t = template(name).ok_or_else(|| {
            format!(
                "unknown template \"{name}\", available: {}",
                TEMPLATES
                    .iter()
                    .map(|t| t.key)
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })?;
        Ok(self.add(t.label, t.power_w, t.circuit, 1, t.hours_per_day))
    }

    /// Removes the load with the given id. Returns `false` if absent.
    pub fn remove(&mut self, id: LoadId) -> bool {
        let before = self.loads.len();
        self.loads.retain(|l| l.id != id);
        self.loads.len() != before
    }

    /// Updates the unit count of an existing entry. Returns `false` if absent.
    pub fn set_quantity(&mut self, id: LoadId, quantity: u32) -> bool {
        match self.get_mut(id) {
            Some(l) => {
                l.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Updates the daily usage hours of an existing entry. Returns `false` if absent.
    pub fn set_hours(&mut self, id: LoadId, hours_per_day: f64) -> bool {
        match self.get_mut(id) {
            Some(l) => {
                l.hours_per_day = hours_per_day;
                true
            }
            None => false,
        }
    }

    /// Looks up a load by id.
    pub fn get(&self, id: LoadId) -> Option<&ApplianceLoad> {
        self.loads.iter().find(|l| l.id == id)
    }

    fn get_mut(&mut self, id: LoadId) -> Option<&mut ApplianceLoad> {
        self.loads.iter_mut().find(|l| l.id == id)
    }

    /// All entries, in insertion order.
    pub fn loads(&self) -> &[ApplianceLoad] {
        &self.loads
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Whether the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// Consumes the registry, yielding the owned entries.
    pub fn into_loads(self) -> Vec<ApplianceLoad> {
        self.loads
    }
}

/// A quick-pick appliance template.
#[derive(Debug, Clone, Copy)]
pub struct ApplianceTemplate {
    /// Lookup key used on the command line.
    pub key: &'static str,
    /// Display label for the created entry.
    pub label: &'static str,
    /// Power draw per unit (W).
    pub power_w: f64,
    /// Circuit the appliance runs on.
    pub circuit: CircuitType,
    /// Typical daily usage (h).
    pub hours_per_day: f64,
}

/// Built-in quick-pick catalog of common off-grid appliances.
pub const TEMPLATES: &[ApplianceTemplate] = &[
    ApplianceTemplate {
        key: "led_light",
        label: "LED Light",
        power_w: 10.0,
        circuit: CircuitType::Dc,
        hours_per_day: 6.0,
    },
    ApplianceTemplate {
        key: "ceiling_fan",
        label: "Ceiling Fan",
        power_w: 75.0,
        circuit: CircuitType::Ac,
        hours_per_day: 8.0,
    },
    ApplianceTemplate {
        key: "refrigerator",
        label: "Refrigerator",
        power_w: 150.0,
        circuit: CircuitType::Ac,
        hours_per_day: 8.0,
    },
    ApplianceTemplate {
        key: "tv",
        label: "Television",
        power_w: 120.0,
        circuit: CircuitType::Ac,
        hours_per_day: 4.0,
    },
    ApplianceTemplate {
        key: "laptop",
        label: "Laptop",
        power_w: 65.0,
        circuit: CircuitType::Ac,
        hours_per_day: 5.0,
    },
    ApplianceTemplate {
        key: "water_pump",
        label: "Water Pump",
        power_w: 750.0,
        circuit: CircuitType::Ac,
        hours_per_day: 1.0,
    },
    ApplianceTemplate {
        key: "phone_charger",
        label: "Phone Charger",
        power_w: 10.0,
        circuit: CircuitType::Dc,
        hours_per_day: 2.0,
    },
];

/// Looks up a template by key.
pub fn template(key: &str) -> Option<&'static ApplianceTemplate> {
    TEMPLATES.iter().find(|t| t.key == key)
}
