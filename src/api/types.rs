//! Request and response types for the production-plan endpoint.

use serde::{Deserialize, Serialize};

use crate::dispatch::types::{FuelCosts, PowerPlant};

/// `POST /productionplan` request body.
///
/// `fuels` may be omitted entirely or field-by-field; missing prices fall
/// back to [`FuelCosts::default`].
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    /// Requested total output (MW).
    pub load: f64,
    /// Fuel prices and wind availability.
    #[serde(default)]
    pub fuels: FuelCosts,
    /// Available plants, in request order.
    pub powerplants: Vec<PowerPlant>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// `GET /health` response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the service is up.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
}
