//! Shared test fixtures for integration tests.

use merit_dispatch::dispatch::types::{FuelCosts, PlantType, PowerPlant};

/// Fuel prices with the given wind availability (gas 13.4, kerosine 50.8).
pub fn default_fuels(wind_pct: f64) -> FuelCosts {
    FuelCosts {
        gas: 13.4,
        kerosine: 50.8,
        co2: 20.0,
        wind_pct,
    }
}

/// Gas-fired plant with the given efficiency and power range.
pub fn gas_plant(name: &str, efficiency: f64, pmin: f64, pmax: f64) -> PowerPlant {
    PowerPlant {
        name: name.to_string(),
        kind: PlantType::GasFired,
        efficiency,
        pmin,
        pmax,
    }
}

/// Turbojet plant with the given efficiency and power range.
pub fn turbojet_plant(name: &str, efficiency: f64, pmin: f64, pmax: f64) -> PowerPlant {
    PowerPlant {
        name: name.to_string(),
        kind: PlantType::Turbojet,
        efficiency,
        pmin,
        pmax,
    }
}

/// Wind turbine with the given peak capacity (no minimum, free to run).
pub fn wind_plant(name: &str, pmax: f64) -> PowerPlant {
    PowerPlant {
        name: name.to_string(),
        kind: PlantType::WindTurbine,
        efficiency: 1.0,
        pmin: 0.0,
        pmax,
    }
}

/// The six-plant fleet from the reference payload (two large gas units, one
/// old gas unit, a turbojet, and two wind parks).
pub fn reference_fleet() -> Vec<PowerPlant> {
    vec![
        gas_plant("gasfiredbig1", 0.53, 100.0, 460.0),
        gas_plant("gasfiredbig2", 0.53, 100.0, 460.0),
        gas_plant("gasfiredsomewhatsmaller", 0.37, 40.0, 210.0),
        turbojet_plant("tj1", 0.3, 0.0, 16.0),
        wind_plant("windpark1", 150.0),
        wind_plant("windpark2", 36.0),
    ]
}
