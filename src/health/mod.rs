//! Health aggregation subsystem.
//!
//! # Data Flow
//! ```text
//! EndpointSpec list (configured order)
//!     → aggregator.rs (one probe per endpoint, sequential)
//!     → report.rs (per-endpoint classification)
//!     → AggregateReport (counts, success rate, overall status)
//! ```
//!
//! # Design Decisions
//! - Failed probes are folded in as data; only a malformed base URL aborts
//! - Result order follows the configured endpoint order for deterministic
//!   output
//! - Success rate maps to overall status through a two-threshold step
//!   function with inclusive lower bounds

pub mod aggregator;
pub mod report;

pub use aggregator::{AggregateError, Aggregator};
pub use report::{AggregateReport, EndpointResult, EndpointSpec, OverallStatus};
