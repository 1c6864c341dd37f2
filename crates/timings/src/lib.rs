//! Named-Span Timing
//!
//! This crate provides a small wall-clock instrumentation component: a
//! registry of named timing slots with start/end/reset lifecycle operations
//! and human-readable elapsed-duration rendering with automatic unit
//! selection. It supports:
//!
//! - A fixed, caller-declared slot set, generic over the identifier type
//! - One shared clock sample per lifecycle call, so spans started together
//!   report identical start times
//! - Per-slot formatted results that degrade to diagnostic strings on
//!   misuse instead of failing
//! - Batch snapshots keyed by sanitized, property-safe identifiers
//! - Duration formatting from hours down to nanoseconds, with approximate
//!   sub-millisecond readings marked as such
//!
//! It is deliberately not a metrics pipeline: no aggregation across runs,
//! no percentiles, no export, no persistence. It measures named spans
//! within a single process lifetime and reports them as strings.
//!
//! Misuse (unknown identifiers, reading a span that was never started or
//! ended) is reported through the return value and a warning-level
//! `tracing` event on the `timings` target, never through a hard failure:
//! a measurement aid must not abort the operation it is measuring.
//!
//! # Example
//!
//! ```rust
//! use timings::{Timings, UnitStyle};
//!
//! let mut timings = Timings::new(["parse", "render"]).unwrap();
//!
//! timings.start(&["parse", "render"]);
//! // ... parse ...
//! timings.end(&["parse"]);
//! // ... render ...
//! timings.end(&["render"]);
//!
//! for (key, duration) in timings.get_results(UnitStyle::Full) {
//!     println!("{key}: {duration}");
//! }
//! ```
//!
//! # Modules
//!
//! - [`registry`] - The slot registry and its lifecycle operations
//! - [`format`] - Elapsed-duration formatting
//! - [`clock`] - The monotonic millisecond clock
//! - [`error`] - Error types

pub mod clock;
mod error;
mod format;
mod registry;

pub use error::{TimingsError, TimingsResult};
pub use format::{format_ms, UnitStyle};
pub use registry::{
    TimingSlot, Timings, NOT_ENDED_RESULT, NOT_STARTED_RESULT, RESULT_KEY_PREFIX,
    UNKNOWN_ID_RESULT,
};
