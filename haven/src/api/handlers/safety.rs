use axum::extract::{Query, State};
use axum::Json;
use chrono::Local;

use crate::api::dto::{CoordQuery, RouteQuery};
use crate::api::state::AppState;
use crate::error::Result;
use crate::models::{RoutePlan, SafetyAssessment, TravelMode};
use crate::services::{RouteGenerator, ScoreEngine};

use super::resolve_coords;

/// `GET /api/predict`
///
/// Pure and idempotent apart from the random perturbation.
#[utoipa::path(
    get,
    path = "/api/predict",
    tag = "safety",
    params(CoordQuery),
    responses(
        (status = 200, description = "Safety assessment for the coordinate", body = SafetyAssessment),
        (status = 400, description = "Missing coordinates in strict mode"),
    )
)]
pub async fn predict(
    State(state): State<AppState>,
    Query(params): Query<CoordQuery>,
) -> Result<Json<SafetyAssessment>> {
    let (lat, lng) = resolve_coords(&state.config, params.lat, params.lng)?;
    let assessment = ScoreEngine::assess(lat, lng, Local::now().naive_local(), state.sample());

    tracing::debug!(lat, lng, score = assessment.score, label = %assessment.label, "Scored coordinate");
    Ok(Json(assessment))
}

/// `GET /api/route`
#[utoipa::path(
    get,
    path = "/api/route",
    tag = "safety",
    params(RouteQuery),
    responses(
        (status = 200, description = "Mode-specific polyline plus its assessment", body = RoutePlan),
        (status = 400, description = "Missing coordinates in strict mode"),
    )
)]
pub async fn route_plan(
    State(state): State<AppState>,
    Query(params): Query<RouteQuery>,
) -> Result<Json<RoutePlan>> {
    let (lat, lng) = resolve_coords(&state.config, params.lat, params.lng)?;
    let mode = TravelMode::parse(params.mode.as_deref().unwrap_or("walking"));
    let plan = RouteGenerator::plan(lat, lng, mode, Local::now().naive_local(), state.sample());

    tracing::debug!(lat, lng, ?mode, "Generated route");
    Ok(Json(plan))
}
