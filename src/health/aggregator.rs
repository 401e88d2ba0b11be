//! Health aggregation over a configured endpoint list.
//!
//! # Responsibilities
//! - Probe each endpoint exactly once, in the order supplied
//! - Fold the outcomes into one `AggregateReport`
//! - Optionally short-circuit on a failed base-URL connectivity pre-check
//!
//! # Design Decisions
//! - Probes run sequentially; endpoint counts are small and each probe
//!   carries its own timeout, so no attempt can hang the run
//! - A failed probe is data, not an error; only a malformed base URL aborts,
//!   once, before any probing
//! - The aggregator never prints or exits; rendering and the process exit
//!   code belong to the caller

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::health::report::{AggregateReport, EndpointResult, EndpointSpec};
use crate::probe::Probe;

/// Errors that abort a validation run before any endpoint is probed.
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
}

/// Folds per-endpoint probe outcomes into one aggregate report.
pub struct Aggregator<P> {
    base_url: Url,
    prober: P,
    timeout: Duration,
}

impl<P: Probe> Aggregator<P> {
    /// Create an aggregator for one target host.
    ///
    /// The base URL is validated here, once; it is the only configuration
    /// input that can abort a run.
    pub fn new(base_url: &str, prober: P, timeout: Duration) -> Result<Self, AggregateError> {
        let parsed = Url::parse(base_url).map_err(|source| AggregateError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        Ok(Self {
            base_url: parsed,
            prober,
            timeout,
        })
    }

    /// Probe every endpoint once, in the order supplied.
    ///
    /// Never fails for an individual endpoint; failed probes are folded into
    /// the report as data.
    pub async fn run(&self, specs: &[EndpointSpec]) -> AggregateReport {
        let mut results = Vec::with_capacity(specs.len());

        for spec in specs {
            let url = self.endpoint_url(&spec.path);
            tracing::debug!(name = %spec.name, %url, "probing endpoint");

            let outcome = self.prober.probe(&url, self.timeout).await;
            results.push(EndpointResult {
                spec: spec.clone(),
                outcome,
            });
        }

        let report = AggregateReport::from_results(results);
        tracing::info!(
            total = report.total,
            successful = report.successful,
            success_rate = report.success_rate,
            status = %report.overall,
            "validation run complete"
        );
        report
    }

    /// Probe the bare base URL first; if no response comes back, skip the
    /// per-endpoint loop and report FAILED with an empty detailed section.
    ///
    /// Any response, success or not, proves the host is reachable and lets
    /// the endpoint loop run.
    pub async fn run_with_precheck(&self, specs: &[EndpointSpec]) -> AggregateReport {
        let base = self.base_root();
        tracing::debug!(url = %base, "running connectivity pre-check");

        let connectivity = self.prober.probe(&base, self.timeout).await;
        if connectivity.status_code().is_none() {
            tracing::warn!(url = %base, "connectivity pre-check failed, skipping endpoint probes");
            return AggregateReport::unreachable(connectivity);
        }

        self.run(specs).await.with_connectivity(connectivity)
    }

    fn base_root(&self) -> String {
        self.base_url.as_str().trim_end_matches('/').to_string()
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_root(), path)
    }
}
