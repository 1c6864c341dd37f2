//! Monotonic millisecond clock

use std::sync::OnceLock;
use std::time::Instant;

/// Anchor instant for the process-wide clock, created on first use.
static ANCHOR: OnceLock<Instant> = OnceLock::new();

/// Current monotonic time in fractional milliseconds.
///
/// Readings count from a process-wide anchor created the first time the
/// clock is sampled, so they behave like the browser's `performance.now()`:
/// monotonic, sub-millisecond, and meaningful only relative to each other.
///
/// The returned value is always strictly positive. Zero and below are
/// reserved as the "timestamp not recorded" sentinel, and the very first
/// sample can otherwise land inside the anchor's own clock tick.
pub fn now_ms() -> f64 {
    let anchor = ANCHOR.get_or_init(Instant::now);
    let ms = anchor.elapsed().as_secs_f64() * 1000.0;
    ms.max(f64::MIN_POSITIVE)
}
