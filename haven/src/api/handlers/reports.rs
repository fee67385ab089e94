use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Local;

use crate::api::dto::{FeedResponse, ReportRequest, SosRequest};
use crate::api::state::AppState;
use crate::db::repository::ReportRepository;
use crate::error::Result;
use crate::models::Severity;
use crate::services::TimelineAggregator;

use super::resolve_coords;

/// `POST /api/report`
#[utoipa::path(
    post,
    path = "/api/report",
    tag = "reports",
    request_body = ReportRequest,
    responses(
        (status = 204, description = "Report persisted"),
        (status = 400, description = "Missing coordinates in strict mode"),
    )
)]
pub async fn create_report(
    State(state): State<AppState>,
    Json(req): Json<ReportRequest>,
) -> Result<StatusCode> {
    let (lat, lng) = resolve_coords(&state.config, req.lat, req.lng)?;
    let conn = state.db.connect()?;
    let report = ReportRepository::create(&conn, lat, lng, req.severity, &req.note).await?;

    tracing::info!(id = report.id, severity = %report.severity, "Saved incident report");
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/sos`
///
/// Stored as a High-severity report; the trigger kind lands in the note
/// so the feed and exports show it without a dedicated table.
#[utoipa::path(
    post,
    path = "/api/sos",
    tag = "reports",
    request_body = SosRequest,
    responses(
        (status = 204, description = "SOS recorded"),
        (status = 400, description = "Missing coordinates in strict mode"),
    )
)]
pub async fn trigger_sos(
    State(state): State<AppState>,
    Json(req): Json<SosRequest>,
) -> Result<StatusCode> {
    let (lat, lng) = resolve_coords(&state.config, req.lat, req.lng)?;
    let kind = req.kind.unwrap_or_else(|| "unknown".to_string());
    let note = format!("SOS triggered: {kind}");

    let conn = state.db.connect()?;
    let report = ReportRepository::create(&conn, lat, lng, Severity::High, &note).await?;

    tracing::warn!(id = report.id, lat, lng, kind = %kind, "SOS received");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/reports`
///
/// The incident feed plus the 7-day trend series for the dashboard
/// chart. The trend is mocked per call, not derived from the reports.
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = "reports",
    responses(
        (status = 200, description = "Recent reports and timeline", body = FeedResponse),
    )
)]
pub async fn incident_feed(State(state): State<AppState>) -> Result<Json<FeedResponse>> {
    let conn = state.db.connect()?;
    let reports = ReportRepository::recent(&conn, state.config.feed.feed_limit).await?;
    let timeline =
        state.with_rng(|rng| TimelineAggregator::series(Local::now().date_naive(), rng));

    Ok(Json(FeedResponse { reports, timeline }))
}

/// `POST /api/clear_reports`
///
/// Reports only; shares and chat history are never bulk-cleared.
#[utoipa::path(
    post,
    path = "/api/clear_reports",
    tag = "reports",
    responses(
        (status = 204, description = "All reports deleted"),
    )
)]
pub async fn clear_reports(State(state): State<AppState>) -> Result<StatusCode> {
    let conn = state.db.connect()?;
    let deleted = ReportRepository::clear(&conn).await?;

    tracing::info!(deleted, "Cleared incident reports");
    Ok(StatusCode::NO_CONTENT)
}
