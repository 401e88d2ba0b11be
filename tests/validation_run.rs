//! End-to-end validation runs against in-process mock targets.

mod common;

use std::net::SocketAddr;
use std::time::Duration;

use upcheck::health::aggregator::Aggregator;
use upcheck::health::report::{EndpointSpec, OverallStatus};
use upcheck::output::render_report;
use upcheck::probe::{ErrorKind, HttpProber};

fn well_known_specs() -> Vec<EndpointSpec> {
    vec![
        EndpointSpec::new("/", "Root"),
        EndpointSpec::new("/health", "Health"),
        EndpointSpec::new("/api/status", "API Status"),
    ]
}

#[tokio::test]
async fn all_endpoints_healthy() {
    let addr: SocketAddr = "127.0.0.1:29181".parse().unwrap();
    common::start_path_backend(addr, |_path| (200, r#"{"status":"ok"}"#.to_string())).await;

    let aggregator = Aggregator::new(
        &format!("http://{}", addr),
        HttpProber::new(),
        Duration::from_secs(5),
    )
    .unwrap();

    let report = aggregator.run(&well_known_specs()).await;

    assert_eq!(report.total, 3);
    assert_eq!(report.successful, 3);
    assert_eq!(report.failed, 0);
    assert_eq!(report.success_rate, 100);
    assert_eq!(report.overall, OverallStatus::Healthy);
    assert_eq!(report.overall.exit_code(), 0);

    // Every attempt carries a measured duration.
    assert!(report.results.iter().all(|r| r.elapsed() > Duration::ZERO));
}

#[tokio::test]
async fn missing_route_counts_as_failure() {
    let addr: SocketAddr = "127.0.0.1:29182".parse().unwrap();
    common::start_path_backend(addr, |path| {
        if path == "/users" {
            (404, "not found".to_string())
        } else {
            (200, "ok".to_string())
        }
    })
    .await;

    let mut specs = well_known_specs();
    specs.push(EndpointSpec::new("/users", "Users"));

    let aggregator = Aggregator::new(
        &format!("http://{}", addr),
        HttpProber::new(),
        Duration::from_secs(5),
    )
    .unwrap();

    let report = aggregator.run(&specs).await;

    assert_eq!(report.total, 4);
    assert_eq!(report.successful, 3);
    assert_eq!(report.success_rate, 75);
    assert_eq!(report.overall, OverallStatus::Degraded);

    let users = &report.results[3];
    assert_eq!(users.spec.path, "/users");
    assert!(!users.success());
    assert_eq!(users.outcome.status_code(), Some(404));
}

#[tokio::test]
async fn refused_connections_are_classified_and_unhealthy() {
    // Nothing listens on this port.
    let addr: SocketAddr = "127.0.0.1:29183".parse().unwrap();

    let aggregator = Aggregator::new(
        &format!("http://{}", addr),
        HttpProber::new(),
        Duration::from_secs(5),
    )
    .unwrap();

    let report = aggregator.run(&well_known_specs()).await;

    assert_eq!(report.successful, 0);
    assert_eq!(report.success_rate, 0);
    assert_eq!(report.overall, OverallStatus::Unhealthy);
    assert_eq!(report.overall.exit_code(), 1);

    for result in &report.results {
        assert_eq!(
            result.outcome.error_kind(),
            Some(ErrorKind::ConnectionRefused),
            "endpoint {} should be refused",
            result.spec.path
        );
    }
}

#[tokio::test]
async fn hung_server_maps_to_timed_out() {
    let addr: SocketAddr = "127.0.0.1:29184".parse().unwrap();
    common::start_silent_backend(addr).await;

    let timeout = Duration::from_millis(500);
    let aggregator =
        Aggregator::new(&format!("http://{}", addr), HttpProber::new(), timeout).unwrap();

    let report = aggregator
        .run(&[EndpointSpec::new("/health", "Health")])
        .await;

    assert_eq!(report.overall, OverallStatus::Unhealthy);
    let result = &report.results[0];
    assert_eq!(result.outcome.error_kind(), Some(ErrorKind::TimedOut));
    // The attempt was bounded by its own timeout.
    assert!(result.elapsed() >= Duration::from_millis(400));
    assert!(result.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn precheck_failure_short_circuits() {
    // Nothing listens on this port.
    let addr: SocketAddr = "127.0.0.1:29185".parse().unwrap();

    let aggregator = Aggregator::new(
        &format!("http://{}", addr),
        HttpProber::new(),
        Duration::from_secs(5),
    )
    .unwrap();

    let report = aggregator.run_with_precheck(&well_known_specs()).await;

    assert_eq!(report.overall, OverallStatus::Failed);
    assert!(report.results.is_empty());
    assert_eq!(report.total, 0);
    assert_eq!(report.overall.exit_code(), 1);
    assert_eq!(
        report.connectivity.as_ref().unwrap().error_kind(),
        Some(ErrorKind::ConnectionRefused)
    );

    let rendered = render_report(&report);
    assert!(rendered.contains("Overall status:  FAILED"));
    assert!(rendered.contains("Endpoint probes skipped"));
}

#[tokio::test]
async fn precheck_passes_through_when_reachable() {
    let addr: SocketAddr = "127.0.0.1:29186".parse().unwrap();
    common::start_path_backend(addr, |_path| (200, "ok".to_string())).await;

    let aggregator = Aggregator::new(
        &format!("http://{}", addr),
        HttpProber::new(),
        Duration::from_secs(5),
    )
    .unwrap();

    let report = aggregator.run_with_precheck(&well_known_specs()).await;

    assert_eq!(report.overall, OverallStatus::Healthy);
    assert_eq!(report.connectivity.as_ref().unwrap().status_code(), Some(200));

    let rendered = render_report(&report);
    assert!(rendered.contains("✅ Basic connectivity: HTTP 200"));
    assert!(rendered.contains("Overall status:  HEALTHY"));
}

#[tokio::test]
async fn server_errors_degrade_the_run() {
    let addr: SocketAddr = "127.0.0.1:29187".parse().unwrap();
    common::start_path_backend(addr, |path| {
        if path == "/api/status" {
            (503, "unavailable".to_string())
        } else {
            (200, "ok".to_string())
        }
    })
    .await;

    let aggregator = Aggregator::new(
        &format!("http://{}", addr),
        HttpProber::new(),
        Duration::from_secs(5),
    )
    .unwrap();

    let report = aggregator.run(&well_known_specs()).await;

    assert_eq!(report.successful, 2);
    assert_eq!(report.success_rate, 67);
    assert_eq!(report.overall, OverallStatus::Degraded);
}
