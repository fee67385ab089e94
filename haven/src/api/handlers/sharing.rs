use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::ShareRequest;
use crate::api::state::AppState;
use crate::db::repository::ShareRepository;
use crate::error::Result;

use super::resolve_coords;

/// `POST /api/share`
///
/// One tick of a live-location broadcast. Session start/stop lives in
/// the client; the server just appends ticks.
#[utoipa::path(
    post,
    path = "/api/share",
    tag = "sharing",
    request_body = ShareRequest,
    responses(
        (status = 204, description = "Share tick persisted"),
        (status = 400, description = "Missing coordinates in strict mode"),
    )
)]
pub async fn share_tick(
    State(state): State<AppState>,
    Json(req): Json<ShareRequest>,
) -> Result<StatusCode> {
    let (lat, lng) = resolve_coords(&state.config, req.lat, req.lng)?;
    let conn = state.db.connect()?;
    let share = ShareRepository::create(&conn, lat, lng).await?;

    tracing::debug!(id = share.id, lat, lng, "Recorded location share tick");
    Ok(StatusCode::NO_CONTENT)
}
