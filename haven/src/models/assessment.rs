use serde::{Deserialize, Serialize};

use super::{GeoPoint, SafetyColor, SafetyLabel};

/// The score/label/route bundle returned for a coordinate.
///
/// Transient, never persisted. `color` always agrees with `label`;
/// `score` is rounded to 3 decimal places and clamped to [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SafetyAssessment {
    pub score: f64,
    pub label: SafetyLabel,
    pub color: SafetyColor,
    pub alt_route: Vec<GeoPoint>,
    pub steps: Vec<String>,
}

/// A generated polyline plus the assessment of travelling it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RoutePlan {
    pub route: Vec<GeoPoint>,
    pub prediction: SafetyAssessment,
}

/// The 7-day trend series shown on the dashboard chart.
///
/// `labels` and `values` are index-aligned, oldest day first, always
/// exactly 7 entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TimelineSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}
