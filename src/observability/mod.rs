//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing everywhere in the library
//! - The library never writes to stdout; that channel belongs to the
//!   rendered report

pub mod logging;
