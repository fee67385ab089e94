use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use crate::models;
use crate::services;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Haven API",
        version = "1.0.0",
        description = "Location-aware personal-safety advisory backend: safety scoring, routing, incident reports, SOS, location sharing, and chat assistance.",
    ),
    paths(
        handlers::health::health_check,
        handlers::safety::predict,
        handlers::safety::route_plan,
        handlers::reports::create_report,
        handlers::reports::trigger_sos,
        handlers::reports::incident_feed,
        handlers::reports::clear_reports,
        handlers::assistant::chat,
        handlers::sharing::share_tick,
        handlers::export::export_reports,
        handlers::export::export_logs,
    ),
    components(schemas(
        // Domain
        models::GeoPoint,
        models::Severity,
        models::SafetyLabel,
        models::SafetyColor,
        models::TravelMode,
        models::SafetyAssessment,
        models::RoutePlan,
        models::TimelineSeries,
        models::IncidentReport,
        models::LocationShare,
        models::ChatExchange,
        // DTOs
        dto::ReportRequest,
        dto::SosRequest,
        dto::ShareRequest,
        dto::ChatRequest,
        dto::ChatReply,
        dto::FeedResponse,
        // Export
        services::DemoLog,
        // Health
        handlers::health::HealthData,
    ))
)]
pub struct ApiDoc;

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
