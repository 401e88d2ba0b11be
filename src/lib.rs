//! Endpoint health validation library.
//!
//! Probes a fixed list of well-known endpoints on one target host,
//! classifies each response, and folds the outcomes into a single
//! aggregate status with a success rate.
//!
//! # Data Flow
//! ```text
//! Endpoint list (config)
//!     → Aggregator (health/aggregator.rs)
//!     → Probe capability (probe/http.rs, one GET per endpoint)
//!     → EndpointResult (2xx = success, everything else = failure)
//!     → AggregateReport (counts, success rate, overall status)
//!     → console rendering + exit code (caller's responsibility)
//! ```

// Core subsystems
pub mod config;
pub mod health;
pub mod probe;

// Cross-cutting concerns
pub mod observability;
pub mod output;

pub use config::ValidatorConfig;
pub use health::aggregator::Aggregator;
pub use health::report::{AggregateReport, EndpointResult, EndpointSpec, OverallStatus};
pub use probe::{ErrorKind, HttpProber, Probe, ProbeOutcome};
