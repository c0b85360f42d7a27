//! Marginal cost model for ranking plants.

use crate::dispatch::types::{FuelCosts, PlantType, PowerPlant};

/// Cost of producing one additional MWh with the given plant.
///
/// Wind is free; fuel burners pay their fuel price scaled by efficiency;
/// unrecognized kinds price at `+inf` so they always sort behind anything
/// dispatchable. Pure function, no side effects.
///
/// A zero efficiency yields `+inf` under IEEE-754 division rather than a
/// panic; the API boundary rejects such plants before dispatch runs.
pub fn marginal_cost(plant: &PowerPlant, fuels: &FuelCosts) -> f64 {
    match plant.kind {
        PlantType::GasFired => fuels.gas / plant.efficiency,
        PlantType::Turbojet => fuels.kerosine / plant.efficiency,
        PlantType::WindTurbine => 0.0,
        PlantType::Other => f64::INFINITY,
    }
}
