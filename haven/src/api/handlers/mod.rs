pub mod assistant;
pub mod export;
pub(crate) mod health;
pub mod reports;
pub mod safety;
pub mod sharing;

pub use health::health_check;

use crate::config::Config;
use crate::error::{HavenError, Result};

/// Apply the configured coordinate policy to an optional lat/lng pair.
///
/// Default policy substitutes the fallback anchor for whatever is
/// missing; strict mode turns an incomplete pair into a 400.
pub(crate) fn resolve_coords(
    config: &Config,
    lat: Option<f64>,
    lng: Option<f64>,
) -> Result<(f64, f64)> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => Ok((lat, lng)),
        _ if config.geo.strict => Err(HavenError::Validation(
            "lat and lng are required".to_string(),
        )),
        _ => Ok((
            lat.unwrap_or(config.geo.fallback_lat),
            lng.unwrap_or(config.geo.fallback_lng),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_coords_fall_back_by_default() {
        let config = Config::from_env();
        assert_eq!(
            resolve_coords(&config, None, None).unwrap(),
            (28.4595, 77.0266)
        );
        assert_eq!(
            resolve_coords(&config, Some(12.0), None).unwrap(),
            (12.0, 77.0266)
        );
    }

    #[test]
    fn strict_mode_rejects_incomplete_pairs() {
        let mut config = Config::from_env();
        config.geo.strict = true;
        assert!(resolve_coords(&config, None, Some(77.0)).is_err());
        assert_eq!(
            resolve_coords(&config, Some(12.0), Some(77.0)).unwrap(),
            (12.0, 77.0)
        );
    }
}
