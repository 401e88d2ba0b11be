//! Report rendering.
//!
//! The aggregator never prints; everything user-facing is produced here as a
//! pure function of the report so callers (and tests) decide what to do with
//! it.

pub mod console;

pub use console::render_report;
