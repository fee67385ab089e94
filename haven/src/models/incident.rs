use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Severity;

/// A persisted safety event: a user report or a triggered SOS.
///
/// Immutable once written. The id is assigned by the store and strictly
/// increases per table; `created_at` is captured server-side at insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IncidentReport {
    pub id: i64,
    pub lat: f64,
    pub lng: f64,
    pub severity: Severity,
    pub note: String,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
}

/// One timestamped tick of a live location-sharing session.
///
/// The session itself (start/stop) is client-side state; the store only
/// ever sees discrete ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LocationShare {
    pub id: i64,
    pub lat: f64,
    pub lng: f64,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
}

/// One assistant question/answer pair. No conversation grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChatExchange {
    pub id: i64,
    pub question: String,
    pub answer: String,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
}
