use anyhow::Context;
use axum::{routing::get, Router};
use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub const ANALYZE_TOTAL: &str = "sentiment_analyze_total";
pub const ENGINE_FAILURES_TOTAL: &str = "sentiment_engine_failures_total";
pub const ANALYZE_DURATION_MS: &str = "sentiment_analyze_duration_ms";

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the global Prometheus recorder. Call once per process.
    pub fn init() -> anyhow::Result<Self> {
        // Use default buckets to avoid API differences across crate versions.
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("prometheus: install recorder")?;

        describe_counter!(ANALYZE_TOTAL, "Texts analyzed, labelled by sentiment");
        describe_counter!(
            ENGINE_FAILURES_TOTAL,
            "Engine invariant failures answered with the neutral fallback"
        );
        describe_histogram!(ANALYZE_DURATION_MS, "Engine time per text in milliseconds");

        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}
