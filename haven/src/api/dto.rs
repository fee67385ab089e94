//! Request/response DTOs for the HTTP API.
//!
//! Coordinates are optional everywhere: resolution against the configured
//! fallback (or strict rejection) happens in the handlers, not here.

use serde::{Deserialize, Serialize};

use crate::models::{IncidentReport, Severity, TimelineSeries};

#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct CoordQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct RouteQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Travel mode; unknown values silently fall back to walking.
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct ReportRequest {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct SosRequest {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Free-form trigger kind ("big", "shortcut", …); recorded in the note.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct ShareRequest {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct ChatRequest {
    #[serde(default)]
    pub q: String,
}

/// Wire format: `{ "a": "<answer>" }`
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ChatReply {
    pub a: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct FeedResponse {
    pub reports: Vec<IncidentReport>,
    pub timeline: TimelineSeries,
}
