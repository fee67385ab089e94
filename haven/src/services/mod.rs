mod assistant;
mod export;
mod routing;
mod scoring;
mod timeline;

pub use assistant::{ChatIntent, IntentClassifier};
pub use export::{DemoLog, ExportService, DEMO_LOG_FILENAME, REPORTS_FILENAME};
pub use routing::RouteGenerator;
pub use scoring::ScoreEngine;
pub use timeline::TimelineAggregator;

/// Round to 3 decimal places, the precision of every score on the wire.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
