//! Core dispatch types: fuel prices, plant records, and allocations.

use serde::{Deserialize, Serialize};

/// Fuel and carbon prices plus wind availability for one dispatch request.
///
/// Wire field names carry their units, matching the upstream payload schema.
/// Missing fields fall back to the defaults from [`FuelCosts::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelCosts {
    /// Gas price (euro/MWh).
    #[serde(rename = "gas(euro/MWh)")]
    pub gas: f64,
    /// Kerosine price (euro/MWh).
    #[serde(rename = "kerosine(euro/MWh)")]
    pub kerosine: f64,
    /// Carbon price (euro/ton). Not consumed by the allocation math.
    #[serde(rename = "co2(euro/ton)")]
    pub co2: f64,
    /// Wind availability as a percentage (0–100).
    #[serde(rename = "wind(%)")]
    pub wind_pct: f64,
}

impl Default for FuelCosts {
    fn default() -> Self {
        Self {
            gas: 13.4,
            kerosine: 50.8,
            co2: 20.0,
            wind_pct: 0.0,
        }
    }
}

/// Closed set of plant kinds.
///
/// Any unrecognized `type` string deserializes to [`PlantType::Other`], which
/// the cost model prices at infinity and the allocator never dispatches. Both
/// behaviors match on this enum exhaustively, so adding a kind without
/// updating them is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantType {
    #[serde(rename = "gasfired")]
    GasFired,
    #[serde(rename = "turbojet")]
    Turbojet,
    #[serde(rename = "windturbine")]
    WindTurbine,
    #[serde(other, rename = "other")]
    Other,
}

impl PlantType {
    /// Whether this kind burns fuel and is bound by minimum stable generation.
    pub fn is_thermal(self) -> bool {
        matches!(self, PlantType::GasFired | PlantType::Turbojet)
    }
}

/// A single generation unit as submitted in the request.
///
/// Invariants (`0 <= pmin <= pmax`, `efficiency > 0` for thermal kinds) are
/// enforced by the API boundary before the core runs, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerPlant {
    /// Unique identifier within one request.
    pub name: String,
    /// Plant kind, wire field `type`.
    #[serde(rename = "type")]
    pub kind: PlantType,
    /// Conversion efficiency (ratio of electrical output to fuel input).
    pub efficiency: f64,
    /// Minimum stable output (MW). The plant cannot run below this once on.
    pub pmin: f64,
    /// Maximum output (MW).
    pub pmax: f64,
}

/// One plant's assigned output in the production plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Plant name, matching an input plant exactly.
    pub name: String,
    /// Allocated power (MW).
    pub p: f64,
}

impl Allocation {
    pub fn new(name: impl Into<String>, p: f64) -> Self {
        Self {
            name: name.into(),
            p,
        }
    }
}
