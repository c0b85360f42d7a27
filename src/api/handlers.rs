//! Request handlers for the API endpoints.

use axum::Json;
use axum::http::StatusCode;

use crate::api::types::{ErrorResponse, HealthResponse, PlanRequest};
use crate::api::validate::validate;
use crate::dispatch;
use crate::dispatch::types::Allocation;

/// Uncovered load below this is rounding noise, not a real shortfall.
const SHORTFALL_TOLERANCE: f64 = 0.1;

/// Computes a production plan for the requested load.
///
/// `POST /productionplan` → 200 + `Vec<Allocation>` JSON
/// Invalid payload semantics → 400 + `ErrorResponse` listing every violation.
///
/// A load the fleet cannot cover is not an error: the plan is returned as
/// computed and the shortfall is logged (silent under-supply is the dispatch
/// model's documented behavior; the log line is the operator's signal).
pub async fn production_plan(
    Json(req): Json<PlanRequest>,
) -> Result<Json<Vec<Allocation>>, (StatusCode, Json<ErrorResponse>)> {
    let errors = validate(&req);
    if !errors.is_empty() {
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err((StatusCode::BAD_REQUEST, Json(ErrorResponse { error: joined })));
    }

    let plan = dispatch::build_plan(req.load, &req.fuels, &req.powerplants);
    if plan.shortfall > SHORTFALL_TOLERANCE {
        tracing::warn!(
            load = req.load,
            total_p = plan.total_p,
            shortfall = plan.shortfall,
            "dispatchable capacity below requested load"
        );
    }
    tracing::info!(
        load = req.load,
        plants = req.powerplants.len(),
        total_p = plan.total_p,
        "production plan computed"
    );

    Ok(Json(plan.allocations))
}

/// Liveness probe.
///
/// `GET /health` → 200 + `HealthResponse` JSON
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
