//! Merit-order ranking: plants sorted by ascending marginal cost.

use crate::dispatch::cost::marginal_cost;
use crate::dispatch::types::{FuelCosts, PowerPlant};

/// Returns the plants reordered by ascending marginal cost.
///
/// The sort is stable: plants with equal cost keep their relative input
/// order, so dispatch is deterministic under ties. `f64::total_cmp` gives a
/// total order that places the `+inf` sentinel for unrecognized kinds last.
pub fn merit_order<'a>(plants: &'a [PowerPlant], fuels: &FuelCosts) -> Vec<&'a PowerPlant> {
    let mut ordered: Vec<&PowerPlant> = plants.iter().collect();
    ordered.sort_by(|a, b| marginal_cost(a, fuels).total_cmp(&marginal_cost(b, fuels)));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::types::PlantType;

    fn plant(name: &str, kind: PlantType, efficiency: f64) -> PowerPlant {
        PowerPlant {
            name: name.to_string(),
            kind,
            efficiency,
            pmin: 0.0,
            pmax: 100.0,
        }
    }

    fn fuels() -> FuelCosts {
        FuelCosts {
            gas: 13.4,
            kerosine: 50.8,
            co2: 20.0,
            wind_pct: 60.0,
        }
    }

    #[test]
    fn wind_first_then_cheap_gas_then_turbojet_then_other() {
        let plants = vec![
            plant("jet", PlantType::Turbojet, 0.3),
            plant("mystery", PlantType::Other, 0.9),
            plant("gas", PlantType::GasFired, 0.53),
            plant("wind", PlantType::WindTurbine, 1.0),
        ];
        let ordered = merit_order(&plants, &fuels());
        let names: Vec<&str> = ordered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["wind", "gas", "jet", "mystery"]);
    }

    #[test]
    fn equal_cost_plants_keep_input_order() {
        let plants = vec![
            plant("gas_b", PlantType::GasFired, 0.5),
            plant("gas_a", PlantType::GasFired, 0.5),
            plant("gas_c", PlantType::GasFired, 0.5),
        ];
        let ordered = merit_order(&plants, &fuels());
        let names: Vec<&str> = ordered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["gas_b", "gas_a", "gas_c"]);
    }

    #[test]
    fn efficiency_breaks_price_ties() {
        // Same fuel, better efficiency wins.
        let plants = vec![
            plant("old", PlantType::GasFired, 0.37),
            plant("new", PlantType::GasFired, 0.53),
        ];
        let ordered = merit_order(&plants, &fuels());
        assert_eq!(ordered[0].name, "new");
    }

    #[test]
    fn returns_every_plant_exactly_once() {
        let plants = vec![
            plant("a", PlantType::GasFired, 0.5),
            plant("b", PlantType::Other, 1.0),
            plant("c", PlantType::WindTurbine, 1.0),
        ];
        let ordered = merit_order(&plants, &fuels());
        assert_eq!(ordered.len(), plants.len());
    }
}
