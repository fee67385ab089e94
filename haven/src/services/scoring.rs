use chrono::{NaiveDateTime, Timelike};

use crate::models::{GeoPoint, SafetyAssessment, SafetyLabel};

use super::round3;

/// Hour of day where the mock diurnal risk curve peaks.
const PEAK_RISK_HOUR: f64 = 22.0;

/// Fixed offsets producing a short local detour from the queried point.
const ALT_ROUTE_DELTAS: [(f64, f64); 2] = [(0.0015, 0.0006), (0.0031, 0.0011)];

/// Turn-by-turn instructions are a documented mock: the same three lines
/// regardless of input, not derived from the route geometry.
const STEPS: [&str; 3] = [
    "Head north for 200m",
    "Turn right at the park",
    "Continue straight for 300m",
];

/// Deterministic safety scoring.
///
/// Pure given its inputs: the caller supplies the clock reading and a
/// uniform sample from [0, 1), so tests can pin both and assert exact
/// output. This is an explicit, reproducible formula, not a trained
/// model, and makes no claim of statistical accuracy.
pub struct ScoreEngine;

impl ScoreEngine {
    /// Score a coordinate at a point in time.
    ///
    /// `base = 0.62 - |22 - hour| / 44`, shifted by noise of at most
    /// ±0.14 from `sample`, clamped to [0, 1] and rounded to 3 decimals.
    /// Coordinates are accepted unchecked; range validation is the API
    /// boundary's concern.
    pub fn assess(lat: f64, lng: f64, now: NaiveDateTime, sample: f64) -> SafetyAssessment {
        let hour = f64::from(now.hour());
        let base = 0.62 - (PEAK_RISK_HOUR - hour).abs() / 44.0;
        let noise = (sample - 0.5) * 0.28;
        let score = round3((base + noise).clamp(0.0, 1.0));

        let label = SafetyLabel::from_score(score);
        let origin = GeoPoint::new(lat, lng);

        SafetyAssessment {
            score,
            label,
            color: label.color(),
            alt_route: ALT_ROUTE_DELTAS
                .iter()
                .map(|&(dlat, dlng)| origin.offset(dlat, dlng))
                .collect(),
            steps: STEPS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
