//! Endpoint probing subsystem.
//!
//! # Data Flow
//! ```text
//! URL + timeout
//!     → http.rs (reqwest GET, per-request timeout)
//!     → outcome.rs (status code XOR transport error kind, always timed)
//!     → consumed by health::aggregator
//! ```
//!
//! # Design Decisions
//! - A failed probe is data, not an error: `probe` always returns an outcome
//! - One request per call; no retries, no connection reuse semantics
//! - Duration is measured locally around the call, no shared timer state

pub mod http;
pub mod outcome;

pub use http::HttpProber;
pub use outcome::{ErrorKind, ProbeOutcome};

use std::time::Duration;

/// Single-shot HTTP GET capability consumed by the aggregator.
///
/// Implementations must map transport failures onto [`ErrorKind`] and record
/// the elapsed wall-clock time on success and failure alike.
#[allow(async_fn_in_trait)]
pub trait Probe {
    async fn probe(&self, url: &str, timeout: Duration) -> ProbeOutcome;
}
