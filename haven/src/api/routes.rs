use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::openapi;
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/predict", get(handlers::safety::predict))
        .route("/route", get(handlers::safety::route_plan))
        .route("/report", post(handlers::reports::create_report))
        .route("/reports", get(handlers::reports::incident_feed))
        .route("/chat", post(handlers::assistant::chat))
        .route("/sos", post(handlers::reports::trigger_sos))
        .route("/share", post(handlers::sharing::share_tick))
        .route("/export_reports", get(handlers::export::export_reports))
        .route("/export_logs", get(handlers::export::export_logs))
        .route("/clear_reports", post(handlers::reports::clear_reports))
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(openapi::openapi_json))
        .merge(openapi::redoc_router());

    Router::new()
        .nest("/api", api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
