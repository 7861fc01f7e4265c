//! `/metrics` scrape endpoint plus the per-request recorder layer.

mod handlers;
mod middleware;

pub use handlers::{prometheus_metrics, MetricsState};
pub use middleware::http_metrics_middleware;
