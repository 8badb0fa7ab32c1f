//! telemetry/mod.rs
//! Per-call telemetry: counters, stage timers, and immutable snapshots.
//!
//! The codec layer never logs. Each result carries a `TelemetrySnapshot`
//! and the surrounding service decides what to report.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
