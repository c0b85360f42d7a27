//! Payload validation for the dispatch boundary.
//!
//! The core assumes its invariants hold; every check lives here. All
//! violations are collected and reported together rather than failing on the
//! first one.

use std::collections::HashSet;
use std::fmt;

use crate::api::types::PlanRequest;

/// Payload validation error with field path and constraint description.
#[derive(Debug)]
pub struct PayloadError {
    /// Dotted field path (e.g., `"powerplants[2].efficiency"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl PayloadError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid payload: {} — {}", self.field, self.message)
    }
}

/// Checks every invariant the core relies on. Returns one error per
/// violation; an empty vec means the request may be dispatched.
pub fn validate(req: &PlanRequest) -> Vec<PayloadError> {
    let mut errors = Vec::new();

    if !req.load.is_finite() || req.load < 0.0 {
        errors.push(PayloadError::new(
            "load",
            format!("must be a finite value >= 0, got {}", req.load),
        ));
    }

    if !req.fuels.gas.is_finite() || req.fuels.gas < 0.0 {
        errors.push(PayloadError::new(
            "fuels.gas(euro/MWh)",
            "must be a finite value >= 0",
        ));
    }
    if !req.fuels.kerosine.is_finite() || req.fuels.kerosine < 0.0 {
        errors.push(PayloadError::new(
            "fuels.kerosine(euro/MWh)",
            "must be a finite value >= 0",
        ));
    }
    if !(0.0..=100.0).contains(&req.fuels.wind_pct) {
        errors.push(PayloadError::new(
            "fuels.wind(%)",
            format!("must be within 0–100, got {}", req.fuels.wind_pct),
        ));
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(req.powerplants.len());
    for (i, plant) in req.powerplants.iter().enumerate() {
        if !seen.insert(plant.name.as_str()) {
            errors.push(PayloadError::new(
                format!("powerplants[{i}].name"),
                format!("duplicate plant name \"{}\"", plant.name),
            ));
        }
        if plant.kind.is_thermal() && (!plant.efficiency.is_finite() || plant.efficiency <= 0.0) {
            errors.push(PayloadError::new(
                format!("powerplants[{i}].efficiency"),
                format!("must be a finite value > 0, got {}", plant.efficiency),
            ));
        }
        if !plant.pmin.is_finite() || plant.pmin < 0.0 {
            errors.push(PayloadError::new(
                format!("powerplants[{i}].pmin"),
                format!("must be a finite value >= 0, got {}", plant.pmin),
            ));
        }
        if !plant.pmax.is_finite() || plant.pmax < plant.pmin {
            errors.push(PayloadError::new(
                format!("powerplants[{i}].pmax"),
                format!(
                    "must be a finite value >= pmin ({}), got {}",
                    plant.pmin, plant.pmax
                ),
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::types::{FuelCosts, PlantType, PowerPlant};

    fn plant(name: &str, kind: PlantType, efficiency: f64, pmin: f64, pmax: f64) -> PowerPlant {
        PowerPlant {
            name: name.to_string(),
            kind,
            efficiency,
            pmin,
            pmax,
        }
    }

    fn request(load: f64, plants: Vec<PowerPlant>) -> PlanRequest {
        PlanRequest {
            load,
            fuels: FuelCosts::default(),
            powerplants: plants,
        }
    }

    #[test]
    fn valid_request_passes() {
        let req = request(100.0, vec![plant("g", PlantType::GasFired, 0.5, 10.0, 200.0)]);
        assert!(validate(&req).is_empty());
    }

    #[test]
    fn negative_load_is_rejected() {
        let req = request(-1.0, vec![]);
        let errors = validate(&req);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "load");
    }

    #[test]
    fn zero_efficiency_thermal_plant_is_rejected() {
        let req = request(100.0, vec![plant("g", PlantType::GasFired, 0.0, 0.0, 100.0)]);
        let errors = validate(&req);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "powerplants[0].efficiency");
    }

    #[test]
    fn wind_plant_efficiency_is_not_checked() {
        // Wind never divides by efficiency; the field is informational.
        let req = request(100.0, vec![plant("w", PlantType::WindTurbine, 0.0, 0.0, 150.0)]);
        assert!(validate(&req).is_empty());
    }

    #[test]
    fn pmin_above_pmax_is_rejected() {
        let req = request(100.0, vec![plant("g", PlantType::GasFired, 0.5, 60.0, 50.0)]);
        let errors = validate(&req);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "powerplants[0].pmax");
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let req = request(
            100.0,
            vec![
                plant("g", PlantType::GasFired, 0.5, 0.0, 100.0),
                plant("g", PlantType::Turbojet, 0.3, 0.0, 50.0),
            ],
        );
        let errors = validate(&req);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "powerplants[1].name");
    }

    #[test]
    fn wind_percentage_out_of_range_is_rejected() {
        let mut req = request(100.0, vec![]);
        req.fuels.wind_pct = 130.0;
        let errors = validate(&req);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "fuels.wind(%)");
    }

    #[test]
    fn all_violations_are_reported_together() {
        let req = request(-5.0, vec![plant("g", PlantType::Turbojet, -0.3, -1.0, 100.0)]);
        let errors = validate(&req);
        assert_eq!(errors.len(), 3);
    }
}
