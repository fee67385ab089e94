use chrono::NaiveDateTime;

use crate::models::{GeoPoint, RoutePlan, TravelMode};

use super::ScoreEngine;

/// Per-mode waypoint deltas from the anchor coordinate. Driving covers
/// more ground per step; the safer route is deliberately conservative.
/// These are static heuristics, not map routing.
const WALKING_DELTAS: [(f64, f64); 3] = [(0.0, 0.0), (0.0015, 0.0008), (0.003, 0.0015)];
const DRIVING_DELTAS: [(f64, f64); 3] = [(0.0, 0.0), (0.006, 0.004), (0.012, 0.009)];
const SAFER_DELTAS: [(f64, f64); 3] = [(0.0, 0.0), (0.002, 0.001), (0.004, 0.002)];

/// Fixed 3-point polylines anchored at the requested coordinate.
pub struct RouteGenerator;

impl RouteGenerator {
    /// Build the route for a mode and assess it.
    ///
    /// The prediction is computed at the route's second waypoint, so the
    /// caller gets an assessment of the path ahead rather than of the
    /// origin it is standing on.
    pub fn plan(
        lat: f64,
        lng: f64,
        mode: TravelMode,
        now: NaiveDateTime,
        sample: f64,
    ) -> RoutePlan {
        let route = Self::waypoints(lat, lng, mode);
        let ahead = route[1];

        RoutePlan {
            prediction: ScoreEngine::assess(ahead.lat, ahead.lng, now, sample),
            route,
        }
    }

    fn waypoints(lat: f64, lng: f64, mode: TravelMode) -> Vec<GeoPoint> {
        let deltas = match mode {
            TravelMode::Walking => &WALKING_DELTAS,
            TravelMode::Driving => &DRIVING_DELTAS,
            TravelMode::Safer => &SAFER_DELTAS,
        };
        let anchor = GeoPoint::new(lat, lng);
        deltas
            .iter()
            .map(|&(dlat, dlng)| anchor.offset(dlat, dlng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn each_mode_yields_three_anchored_waypoints() {
        for mode in [TravelMode::Walking, TravelMode::Driving, TravelMode::Safer] {
            let plan = RouteGenerator::plan(28.4595, 77.0266, mode, noon(), 0.5);
            assert_eq!(plan.route.len(), 3);
            assert_eq!(plan.route[0], GeoPoint::new(28.4595, 77.0266));
        }
    }

    #[test]
    fn driving_covers_more_ground_than_safer() {
        let driving = RouteGenerator::plan(28.0, 77.0, TravelMode::Driving, noon(), 0.5);
        let safer = RouteGenerator::plan(28.0, 77.0, TravelMode::Safer, noon(), 0.5);
        let reach = |plan: &RoutePlan| plan.route[2].lat - plan.route[0].lat;
        assert!(reach(&driving) > reach(&safer));
    }

    #[test]
    fn walking_deltas_match_the_fixed_table() {
        let plan = RouteGenerator::plan(28.0, 77.0, TravelMode::Walking, noon(), 0.5);
        assert!((plan.route[1].lat - 28.0015).abs() < 1e-9);
        assert!((plan.route[1].lng - 77.0008).abs() < 1e-9);
        assert!((plan.route[2].lat - 28.003).abs() < 1e-9);
        assert!((plan.route[2].lng - 77.0015).abs() < 1e-9);
    }

    #[test]
    fn prediction_is_taken_at_the_second_waypoint() {
        let plan = RouteGenerator::plan(28.4595, 77.0266, TravelMode::Driving, noon(), 0.5);
        let expected = ScoreEngine::assess(
            plan.route[1].lat,
            plan.route[1].lng,
            noon(),
            0.5,
        );
        assert_eq!(plan.prediction, expected);
    }
}
