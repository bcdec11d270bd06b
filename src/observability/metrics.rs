//! Metrics for the lolomo service
//!
//! Metric names live in [`MetricName`] so no call site spells a raw string.
//! Recording functions are grouped by the component that owns them.

use crate::error::{LolomoError, Result};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::fmt;
use std::sync::OnceLock;
use tracing::info;

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Enum representing all metric names used in the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    // Artwork metrics
    ArtworkGenerated,
    ArtworkFallback,
    ArtworkDuration,

    // Query metrics
    LolomoRequests,
    SearchRequests,
    SearchResults,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::ArtworkGenerated => "lolomo_artwork_generated_total",
            MetricName::ArtworkFallback => "lolomo_artwork_fallback_total",
            MetricName::ArtworkDuration => "lolomo_artwork_duration_seconds",
            MetricName::LolomoRequests => "lolomo_lolomo_requests_total",
            MetricName::SearchRequests => "lolomo_search_requests_total",
            MetricName::SearchResults => "lolomo_search_results",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Install the Prometheus recorder. Idempotent.
pub fn init() -> Result<()> {
    if HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| LolomoError::Metrics(format!("Failed to install Prometheus recorder: {}", e)))?;

    HANDLE.set(handle).ok();
    info!("Metrics system initialized");
    Ok(())
}

/// Render the current metrics in Prometheus text format
pub fn render() -> Option<String> {
    HANDLE.get().map(|handle| handle.render())
}

pub mod artwork {
    use super::MetricName;

    pub fn generated() {
        ::metrics::counter!(MetricName::ArtworkGenerated.as_str()).increment(1);
    }

    /// `reason` is one of "error", "panic", "cancelled", "timeout"
    pub fn fallback(reason: &'static str) {
        ::metrics::counter!(MetricName::ArtworkFallback.as_str(), "reason" => reason).increment(1);
    }

    pub fn duration(secs: f64) {
        ::metrics::histogram!(MetricName::ArtworkDuration.as_str()).record(secs);
    }
}

pub mod query {
    use super::MetricName;

    pub fn lolomo_requested() {
        ::metrics::counter!(MetricName::LolomoRequests.as_str()).increment(1);
    }

    pub fn search_requested(results: usize) {
        ::metrics::counter!(MetricName::SearchRequests.as_str()).increment(1);
        ::metrics::histogram!(MetricName::SearchResults.as_str()).record(results as f64);
    }
}
