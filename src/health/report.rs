//! Per-endpoint results and the aggregate report.

use std::fmt;
use std::time::Duration;

use crate::probe::outcome::ProbeOutcome;

/// Static descriptor of one endpoint to validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSpec {
    /// Path on the target host, e.g. `/health`.
    pub path: String,

    /// Human label used in output, e.g. `Health`.
    pub name: String,
}

impl EndpointSpec {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }
}

/// One endpoint's descriptor paired with its probe outcome.
#[derive(Debug, Clone)]
pub struct EndpointResult {
    pub spec: EndpointSpec,
    pub outcome: ProbeOutcome,
}

impl EndpointResult {
    /// A probe succeeds only on a 2xx response. Any other status (1xx, 3xx,
    /// 4xx, 5xx) and any transport error count as failure; there is no
    /// partial-credit tier.
    pub fn success(&self) -> bool {
        self.outcome.is_success()
    }

    pub fn elapsed(&self) -> Duration {
        self.outcome.elapsed()
    }
}

/// Aggregate classification of one validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverallStatus {
    /// Every endpoint succeeded.
    Healthy,
    /// At least half of the endpoints succeeded, but not all.
    Degraded,
    /// Fewer than half of the endpoints succeeded.
    Unhealthy,
    /// The connectivity pre-check failed; the host was never reachable and
    /// the per-endpoint loop did not run.
    Failed,
}

impl OverallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Healthy => "HEALTHY",
            OverallStatus::Degraded => "DEGRADED",
            OverallStatus::Unhealthy => "UNHEALTHY",
            OverallStatus::Failed => "FAILED",
        }
    }

    /// Process exit code for this status. Pure function of the status.
    pub fn exit_code(&self) -> i32 {
        match self {
            OverallStatus::Healthy => 0,
            _ => 1,
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validation run folded into counts, a success rate, and a status.
///
/// Constructed fresh per run and discarded after rendering; never persisted.
#[derive(Debug, Clone)]
pub struct AggregateReport {
    /// Per-endpoint results in the configured endpoint order. Empty when the
    /// connectivity pre-check failed.
    pub results: Vec<EndpointResult>,

    /// Outcome of the base-URL connectivity pre-check, when one ran.
    pub connectivity: Option<ProbeOutcome>,

    pub total: usize,
    pub successful: usize,
    pub failed: usize,

    /// Integer percentage of successful endpoints, rounded half-up.
    pub success_rate: u8,

    pub overall: OverallStatus,
}

impl AggregateReport {
    /// Fold per-endpoint results into an aggregate.
    ///
    /// Thresholds are inclusive on the lower bound of each band: 100 is
    /// HEALTHY, [50, 100) is DEGRADED, below 50 is UNHEALTHY.
    pub fn from_results(results: Vec<EndpointResult>) -> Self {
        let total = results.len();
        let successful = results.iter().filter(|r| r.success()).count();
        let failed = total - successful;

        // Nothing probed means nothing failed; validation rejects empty
        // endpoint lists before a run gets here.
        let success_rate = if total == 0 {
            100
        } else {
            (successful as f64 / total as f64 * 100.0).round() as u8
        };

        let overall = if success_rate == 100 {
            OverallStatus::Healthy
        } else if success_rate >= 50 {
            OverallStatus::Degraded
        } else {
            OverallStatus::Unhealthy
        };

        Self {
            results,
            connectivity: None,
            total,
            successful,
            failed,
            success_rate,
            overall,
        }
    }

    /// Report shape for a run whose connectivity pre-check failed: the
    /// detailed section stays empty and the status is the terminal FAILED.
    pub fn unreachable(connectivity: ProbeOutcome) -> Self {
        Self {
            results: Vec::new(),
            connectivity: Some(connectivity),
            total: 0,
            successful: 0,
            failed: 0,
            success_rate: 0,
            overall: OverallStatus::Failed,
        }
    }

    pub fn with_connectivity(mut self, outcome: ProbeOutcome) -> Self {
        self.connectivity = Some(outcome);
        self
    }
}
