use serde::{Deserialize, Serialize};

/// A single geographic coordinate on the wire.
///
/// Wire format: `{ "lat": 28.4595, "lng": 77.0266 }`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// The same point shifted by fixed deltas.
    pub fn offset(&self, dlat: f64, dlng: f64) -> Self {
        Self {
            lat: self.lat + dlat,
            lng: self.lng + dlng,
        }
    }
}

/// Incident severity as reported by the client or assigned by SOS handling.
///
/// Wire format: `"Low"`, `"Medium"`, or `"High"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, utoipa::ToSchema)]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Unknown severity: {s}")),
        }
    }
}

/// Safety classification derived from the score thresholds.
///
/// Wire format: `"Safe"`, `"Caution"`, or `"Unsafe"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum SafetyLabel {
    Safe,
    Caution,
    Unsafe,
}

impl SafetyLabel {
    /// Threshold table: score > 0.75 is Safe, score > 0.45 is Caution,
    /// anything else is Unsafe. Both boundaries belong to the lower band.
    pub fn from_score(score: f64) -> Self {
        if score > 0.75 {
            Self::Safe
        } else if score > 0.45 {
            Self::Caution
        } else {
            Self::Unsafe
        }
    }

    /// Display color paired with the label, not independently settable.
    pub fn color(&self) -> SafetyColor {
        match self {
            Self::Safe => SafetyColor::Green,
            Self::Caution => SafetyColor::Orange,
            Self::Unsafe => SafetyColor::Red,
        }
    }
}

impl std::fmt::Display for SafetyLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Safe => write!(f, "Safe"),
            Self::Caution => write!(f, "Caution"),
            Self::Unsafe => write!(f, "Unsafe"),
        }
    }
}

/// Wire format: `"green"`, `"orange"`, or `"red"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SafetyColor {
    Green,
    Orange,
    Red,
}

/// Travel mode for route generation.
///
/// Unknown strings silently fall back to walking; the mobile UI sends a
/// free-form select value and a bad mode must never fail a route request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Walking,
    Driving,
    Safer,
}

impl TravelMode {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "driving" => Self::Driving,
            "safer" => Self::Safer,
            _ => Self::Walking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_thresholds_are_exact() {
        assert_eq!(SafetyLabel::from_score(0.76), SafetyLabel::Safe);
        assert_eq!(SafetyLabel::from_score(1.0), SafetyLabel::Safe);
        // 0.75 belongs to Caution, not Safe
        assert_eq!(SafetyLabel::from_score(0.75), SafetyLabel::Caution);
        assert_eq!(SafetyLabel::from_score(0.46), SafetyLabel::Caution);
        // 0.45 belongs to Unsafe, not Caution
        assert_eq!(SafetyLabel::from_score(0.45), SafetyLabel::Unsafe);
        assert_eq!(SafetyLabel::from_score(0.0), SafetyLabel::Unsafe);
    }

    #[test]
    fn color_follows_label() {
        assert_eq!(SafetyLabel::Safe.color(), SafetyColor::Green);
        assert_eq!(SafetyLabel::Caution.color(), SafetyColor::Orange);
        assert_eq!(SafetyLabel::Unsafe.color(), SafetyColor::Red);
    }

    #[test]
    fn unknown_travel_mode_falls_back_to_walking() {
        assert_eq!(TravelMode::parse("driving"), TravelMode::Driving);
        assert_eq!(TravelMode::parse("SAFER"), TravelMode::Safer);
        assert_eq!(TravelMode::parse("walking"), TravelMode::Walking);
        assert_eq!(TravelMode::parse("unknownmode"), TravelMode::Walking);
        assert_eq!(TravelMode::parse(""), TravelMode::Walking);
    }

    #[test]
    fn severity_round_trips_through_strings() {
        assert_eq!("high".parse::<Severity>().unwrap(), Severity::High);
        assert_eq!(Severity::High.to_string(), "High");
        assert!("extreme".parse::<Severity>().is_err());
    }
}
