//! Named-span timing registry

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::clock;
use crate::error::{TimingsError, TimingsResult};
use crate::format::{format_ms, UnitStyle};

/// Result returned by [`Timings::get_result`] for an identifier outside the
/// construction-time set.
pub const UNKNOWN_ID_RESULT: &str = "INVALID_ID ms";

/// Result returned by [`Timings::get_result`] for a slot whose span was
/// never started.
pub const NOT_STARTED_RESULT: &str = "NOT_STARTED ms";

/// Result returned by [`Timings::get_result`] for a slot whose span was
/// started but never ended.
pub const NOT_ENDED_RESULT: &str = "NOT_ENDED ms";

/// Prefix applied to every sanitized key in [`Timings::get_results`].
pub const RESULT_KEY_PREFIX: &str = "RESULT__";

/// One named span's start/end timestamps.
///
/// Timestamps are monotonic fractional milliseconds from [`clock::now_ms`];
/// any value at or below zero means "not recorded".
#[derive(Debug, Clone, Serialize)]
pub struct TimingSlot<I> {
    /// Caller-supplied identifier, immutable for the slot's lifetime
    pub id: I,
    /// Start timestamp in milliseconds, `0.0` when unset
    pub start: f64,
    /// End timestamp in milliseconds, `0.0` when unset
    pub end: f64,
}

impl<I> TimingSlot<I> {
    fn new(id: I) -> Self {
        Self {
            id,
            start: 0.0,
            end: 0.0,
        }
    }

    /// Whether a start timestamp has been recorded.
    pub fn is_started(&self) -> bool {
        self.start > 0.0
    }

    /// Whether an end timestamp has been recorded.
    pub fn is_ended(&self) -> bool {
        self.end > 0.0
    }

    /// Elapsed milliseconds, or `None` until both timestamps are recorded.
    ///
    /// A negative value is possible when the caller started a new span
    /// before reading the previous one; that is a caller-contract violation,
    /// not something the slot detects.
    pub fn elapsed_ms(&self) -> Option<f64> {
        (self.is_started() && self.is_ended()).then(|| self.end - self.start)
    }
}

/// Registry of named timing slots.
///
/// The slot set is fixed at construction; lifecycle operations referencing
/// unknown identifiers are silently ignored, and read operations degrade to
/// diagnostic strings rather than failing. The registry is a measurement
/// aid: its own misuse must never abort the operation being timed, so
/// construction is the only fallible call.
///
/// All operations are synchronous. Callers on multiple threads must
/// serialize access themselves; the `&mut self` receivers on the mutators
/// make single-writer-at-a-time the natural mode of use.
///
/// # Example
///
/// ```rust
/// use timings::{Timings, UnitStyle};
///
/// let mut timings = Timings::new(["fetch", "parse"]).unwrap();
///
/// timings.start(&["fetch"]);
/// // ... the operation being measured ...
/// timings.end(&["fetch"]);
///
/// println!("fetch took {}", timings.get_result(&"fetch", UnitStyle::Full));
/// ```
#[derive(Debug, Clone)]
pub struct Timings<I> {
    slots: Vec<TimingSlot<I>>,
}

impl<I> Timings<I>
where
    I: Eq + fmt::Display,
{
    /// Create a registry with one zeroed slot per identifier, in order.
    ///
    /// Duplicate identifiers are rejected: lookups are by equality, and a
    /// repeated identifier would leave its later slots unreachable.
    pub fn new(ids: impl IntoIterator<Item = I>) -> TimingsResult<Self> {
        let mut slots: Vec<TimingSlot<I>> = Vec::new();
        for id in ids {
            if slots.iter().any(|slot| slot.id == id) {
                return Err(TimingsError::DuplicateId(id.to_string()));
            }
            slots.push(TimingSlot::new(id));
        }
        Ok(Self { slots })
    }

    /// Number of slots in the registry.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the registry has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn index_of(&self, id: &I) -> Option<usize> {
        self.slots.iter().position(|slot| slot.id == *id)
    }

    /// Record a start timestamp for each known identifier in `ids`.
    ///
    /// The clock is sampled once per call, so identifiers started together
    /// report identical start times. Unknown identifiers are ignored.
    pub fn start(&mut self, ids: &[I]) {
        let now = clock::now_ms();
        for id in ids {
            if let Some(index) = self.index_of(id) {
                self.slots[index].start = now;
            }
        }
    }

    /// Record the same start timestamp on every slot.
    pub fn start_all(&mut self) {
        let now = clock::now_ms();
        for slot in &mut self.slots {
            slot.start = now;
        }
    }

    /// Record an end timestamp for each known identifier in `ids`.
    ///
    /// One shared clock sample per call, unknown identifiers ignored, as
    /// with [`Timings::start`].
    pub fn end(&mut self, ids: &[I]) {
        let now = clock::now_ms();
        for id in ids {
            if let Some(index) = self.index_of(id) {
                self.slots[index].end = now;
            }
        }
    }

    /// Record the same end timestamp on every slot.
    pub fn end_all(&mut self) {
        let now = clock::now_ms();
        for slot in &mut self.slots {
            slot.end = now;
        }
    }

    /// Clear both timestamps for each known identifier in `ids`.
    pub fn reset(&mut self, ids: &[I]) {
        for id in ids {
            if let Some(index) = self.index_of(id) {
                self.slots[index].start = 0.0;
                self.slots[index].end = 0.0;
            }
        }
    }

    /// Clear both timestamps on every slot.
    pub fn reset_all(&mut self) {
        for slot in &mut self.slots {
            slot.start = 0.0;
            slot.end = 0.0;
        }
    }

    /// Raw slot for `id`, or `None` for an unknown identifier.
    pub fn get_data(&self, id: &I) -> Option<&TimingSlot<I>> {
        self.index_of(id).map(|index| &self.slots[index])
    }

    /// Formatted elapsed duration for one slot.
    ///
    /// Degrades to a diagnostic string instead of failing:
    /// [`UNKNOWN_ID_RESULT`] for an identifier outside the registry,
    /// [`NOT_STARTED_RESULT`] / [`NOT_ENDED_RESULT`] for a slot missing a
    /// timestamp. Each diagnostic also emits a warning-level log naming the
    /// identifier and the failed condition.
    pub fn get_result(&self, id: &I, units: UnitStyle) -> String {
        let Some(slot) = self.get_data(id) else {
            tracing::warn!(
                target: "timings",
                id = %id,
                "cannot get result, identifier does not exist"
            );
            return UNKNOWN_ID_RESULT.to_string();
        };

        if !slot.is_started() {
            tracing::warn!(
                target: "timings",
                id = %slot.id,
                "cannot get result, timing has not been started"
            );
            return NOT_STARTED_RESULT.to_string();
        }
        if !slot.is_ended() {
            tracing::warn!(
                target: "timings",
                id = %slot.id,
                "cannot get result, timing has not been ended"
            );
            return NOT_ENDED_RESULT.to_string();
        }

        format_ms(slot.end - slot.start, units)
    }

    /// Formatted durations for every complete slot, keyed by sanitized
    /// identifier.
    ///
    /// Slots missing a start or end timestamp are skipped (with the same
    /// warning as [`Timings::get_result`]) rather than appearing with a
    /// placeholder, so a partial snapshot is always a valid result.
    pub fn get_results(&self, units: UnitStyle) -> BTreeMap<String, String> {
        let mut results = BTreeMap::new();

        for slot in &self.slots {
            if !slot.is_started() {
                tracing::warn!(
                    target: "timings",
                    id = %slot.id,
                    "cannot get result, timing has not been started"
                );
                continue;
            }
            if !slot.is_ended() {
                tracing::warn!(
                    target: "timings",
                    id = %slot.id,
                    "cannot get result, timing has not been ended"
                );
                continue;
            }

            results.insert(
                result_key(&slot.id),
                format_ms(slot.end - slot.start, units),
            );
        }

        results
    }
}

/// Sanitized, property-safe snapshot key for an identifier.
///
/// Surrounding whitespace is trimmed, interior whitespace runs collapse to a
/// single underscore, every other character outside `[A-Za-z0-9_]` becomes a
/// hyphen, and the result carries the [`RESULT_KEY_PREFIX`] tag so it can
/// never collide with a bare identifier.
fn result_key(id: &impl fmt::Display) -> String {
    let id = id.to_string();
    let mut key = String::with_capacity(RESULT_KEY_PREFIX.len() + id.len());
    key.push_str(RESULT_KEY_PREFIX);

    let mut pending_separator = false;
    for c in id.trim().chars() {
        if c.is_whitespace() {
            pending_separator = true;
            continue;
        }
        if pending_separator {
            key.push('_');
            pending_separator = false;
        }
        if c.is_ascii_alphanumeric() || c == '_' {
            key.push(c);
        } else {
            key.push('-');
        }
    }

    key
}
