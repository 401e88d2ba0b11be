//! Probe outcome types.

use std::fmt;
use std::time::Duration;

/// Transport-level failure categories for a probe that received no response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ConnectionRefused,
    ConnectionReset,
    HostNotFound,
    TimedOut,
    /// Any transport failure not covered by the categories above.
    Other,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ConnectionRefused => "connection refused",
            ErrorKind::ConnectionReset => "connection reset",
            ErrorKind::HostNotFound => "host not found",
            ErrorKind::TimedOut => "timed out",
            ErrorKind::Other => "transport error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one HTTP attempt against one endpoint.
///
/// Exactly one of a status code or an error kind is carried. The elapsed
/// wall-clock time of the attempt is recorded in both cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// A response was received, including 4xx/5xx.
    Response { status: u16, elapsed: Duration },
    /// No response was received.
    TransportError { kind: ErrorKind, elapsed: Duration },
}

impl ProbeOutcome {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProbeOutcome::Response { status, .. } => Some(*status),
            ProbeOutcome::TransportError { .. } => None,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            ProbeOutcome::Response { .. } => None,
            ProbeOutcome::TransportError { kind, .. } => Some(*kind),
        }
    }

    pub fn elapsed(&self) -> Duration {
        match self {
            ProbeOutcome::Response { elapsed, .. } => *elapsed,
            ProbeOutcome::TransportError { elapsed, .. } => *elapsed,
        }
    }

    /// True when a response was received with a 2xx status.
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Response { status, .. } if (200..300).contains(status))
    }
}
