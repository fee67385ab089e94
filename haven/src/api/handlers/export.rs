use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::api::state::AppState;
use crate::db::repository::{ChatRepository, ReportRepository};
use crate::error::Result;
use crate::services::{ExportService, DEMO_LOG_FILENAME, REPORTS_FILENAME};

fn attachment(filename: &str, body: Vec<u8>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
}

/// `GET /api/export_reports`
#[utoipa::path(
    get,
    path = "/api/export_reports",
    tag = "export",
    responses(
        (status = 200, description = "Downloadable JSON array of recent reports"),
    )
)]
pub async fn export_reports(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let conn = state.db.connect()?;
    let reports = ReportRepository::recent(&conn, state.config.feed.export_limit).await?;
    let body = ExportService::render_reports(&reports)?;

    tracing::info!(count = reports.len(), "Exported incident reports");
    Ok(attachment(REPORTS_FILENAME, body))
}

/// `GET /api/export_logs`
#[utoipa::path(
    get,
    path = "/api/export_logs",
    tag = "export",
    responses(
        (status = 200, description = "Downloadable JSON document with chats and reports"),
    )
)]
pub async fn export_logs(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let conn = state.db.connect()?;
    let limit = state.config.feed.export_limit;
    let chats = ChatRepository::recent(&conn, limit).await?;
    let reports = ReportRepository::recent(&conn, limit).await?;
    let body = ExportService::render_demo_log(chats, reports)?;

    tracing::info!("Exported demo log");
    Ok(attachment(DEMO_LOG_FILENAME, body))
}
