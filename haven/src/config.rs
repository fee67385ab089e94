use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub geo: GeoConfig,
    pub feed: FeedConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

/// Coordinate handling policy at the API boundary.
///
/// The demo UI always sends coordinates, but the API tolerates their
/// absence. By default a missing coordinate falls back to the configured
/// anchor; with `strict` set, it is rejected with a validation error.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoConfig {
    pub fallback_lat: f64,
    pub fallback_lng: f64,
    pub strict: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Maximum reports returned by the incident feed.
    pub feed_limit: u32,
    /// Maximum rows per table in export documents.
    pub export_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("HAVEN_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("HAVEN_PORT", 5050),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| "file:haven.db".to_string()),
            },
            geo: GeoConfig {
                fallback_lat: parse_env_or("HAVEN_FALLBACK_LAT", 28.4595),
                fallback_lng: parse_env_or("HAVEN_FALLBACK_LNG", 77.0266),
                strict: parse_env_or("HAVEN_STRICT_COORDS", false),
            },
            feed: FeedConfig {
                feed_limit: parse_env_or("HAVEN_FEED_LIMIT", 50),
                export_limit: parse_env_or("HAVEN_EXPORT_LIMIT", 500),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
