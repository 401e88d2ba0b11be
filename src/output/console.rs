//! Human-readable console rendering of validation reports.

use crate::health::report::{AggregateReport, EndpointResult, OverallStatus};
use crate::probe::outcome::ProbeOutcome;

/// Render the per-endpoint lines plus the summary block.
pub fn render_report(report: &AggregateReport) -> String {
    let mut out = String::new();

    if let Some(connectivity) = &report.connectivity {
        out.push_str(&render_connectivity(connectivity));
        out.push('\n');
    }

    for result in &report.results {
        out.push_str(&render_result(result));
        out.push('\n');
    }

    if report.overall == OverallStatus::Failed {
        out.push_str("Endpoint probes skipped: target unreachable\n");
    }

    out.push('\n');
    out.push_str("=== Summary ===\n");
    out.push_str(&format!("Total endpoints: {}\n", report.total));
    out.push_str(&format!("Successful:      {}\n", report.successful));
    out.push_str(&format!("Failed:          {}\n", report.failed));
    out.push_str(&format!("Success rate:    {}%\n", report.success_rate));
    out.push_str(&format!("Overall status:  {}\n", report.overall));

    out
}

fn render_connectivity(outcome: &ProbeOutcome) -> String {
    match outcome.status_code() {
        Some(status) => format!(
            "✅ Basic connectivity: HTTP {} in {} ms",
            status,
            outcome.elapsed().as_millis()
        ),
        None => format!(
            "❌ Basic connectivity: {} in {} ms",
            outcome.error_kind().unwrap_or(crate::probe::ErrorKind::Other),
            outcome.elapsed().as_millis()
        ),
    }
}

fn render_result(result: &EndpointResult) -> String {
    let symbol = if result.success() { "✅" } else { "❌" };

    let detail = match result.outcome.status_code() {
        Some(status) => format!("HTTP {}", status),
        None => result
            .outcome
            .error_kind()
            .unwrap_or(crate::probe::ErrorKind::Other)
            .to_string(),
    };

    format!(
        "{} {} ({}): {} in {} ms",
        symbol,
        result.spec.name,
        result.spec.path,
        detail,
        result.elapsed().as_millis()
    )
}
