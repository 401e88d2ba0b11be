//! HTTP probing backed by reqwest.
//!
//! # Responsibilities
//! - Issue one GET per call with a per-request timeout
//! - Measure elapsed wall-clock time for every attempt
//! - Map transport failures onto the `ErrorKind` categories

use std::error::Error;
use std::io;
use std::time::{Duration, Instant};

use crate::probe::outcome::{ErrorKind, ProbeOutcome};
use crate::probe::Probe;

/// Production probe implementation on a shared reqwest client.
#[derive(Clone)]
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpProber {
    fn default() -> Self {
        Self::new()
    }
}

impl Probe for HttpProber {
    async fn probe(&self, url: &str, timeout: Duration) -> ProbeOutcome {
        let started = Instant::now();

        let result = self
            .client
            .get(url)
            .header("user-agent", "upcheck-health-probe")
            .timeout(timeout)
            .send()
            .await;

        let elapsed = started.elapsed();

        match result {
            Ok(response) => {
                let status = response.status().as_u16();
                if !response.status().is_success() {
                    tracing::warn!(%url, status, "probe returned non-success status");
                }
                ProbeOutcome::Response { status, elapsed }
            }
            Err(err) => {
                let kind = classify_transport_error(&err);
                tracing::warn!(%url, error = %err, kind = kind.as_str(), "probe failed");
                ProbeOutcome::TransportError { kind, elapsed }
            }
        }
    }
}

/// Map a reqwest failure onto a transport error category.
///
/// Refused/reset connections surface as an `io::Error` deep in the source
/// chain; dns resolution failures only surface as a "dns error" message in
/// the hyper connect error, so that one is matched by text.
fn classify_transport_error(err: &reqwest::Error) -> ErrorKind {
    if err.is_timeout() {
        return ErrorKind::TimedOut;
    }

    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            match io_err.kind() {
                io::ErrorKind::ConnectionRefused => return ErrorKind::ConnectionRefused,
                io::ErrorKind::ConnectionReset => return ErrorKind::ConnectionReset,
                _ => {}
            }
        }
        if cause.to_string().starts_with("dns error") {
            return ErrorKind::HostNotFound;
        }
        source = cause.source();
    }

    ErrorKind::Other
}
