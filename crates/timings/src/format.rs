//! Elapsed-duration formatting with automatic unit selection

const MS_PER_SECOND: f64 = 1000.0;
const MS_PER_MINUTE: f64 = 60.0 * MS_PER_SECOND;
const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;

/// Whether formatted durations use abbreviated or full unit names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnitStyle {
    /// `h`, `m`, `s`, `ms`, `μs`, `ns`
    #[default]
    Abbreviated,
    /// `hour`, `minute`, `second`, ... pluralized where the value warrants it
    Full,
}

/// Format a millisecond duration as `"<number> <unit>"`.
///
/// The unit is chosen by magnitude, largest first: hours, minutes, seconds,
/// milliseconds, microseconds, nanoseconds. The scaled value is rendered to
/// two decimal places with trailing zeros (and a bare trailing point)
/// stripped, so `1.50` becomes `1.5` and `2.00` becomes `2`.
///
/// Micro- and nanosecond readings are prefixed with `~`: at that scale the
/// measurement is dominated by clock resolution and call overhead, and the
/// marker keeps the output from implying false precision.
///
/// With [`UnitStyle::Full`] the unit is pluralized unless the floored scaled
/// value is exactly 1 and the rendered number has no decimal portion, so
/// `1 second` stays singular while `1.5 seconds` does not.
///
/// Negative and zero inputs are not special-cased; they fall through every
/// threshold to the nanosecond branch.
///
/// # Example
///
/// ```rust
/// use timings::{format_ms, UnitStyle};
///
/// assert_eq!(format_ms(1500.0, UnitStyle::Abbreviated), "1.5 s");
/// assert_eq!(format_ms(1500.0, UnitStyle::Full), "1.5 seconds");
/// assert_eq!(format_ms(0.5, UnitStyle::Abbreviated), "~500 μs");
/// ```
pub fn format_ms(milliseconds: f64, units: UnitStyle) -> String {
    let (value, abbreviated, full) = if milliseconds >= MS_PER_HOUR {
        (milliseconds / MS_PER_HOUR, "h", "hour")
    } else if milliseconds >= MS_PER_MINUTE {
        (milliseconds / MS_PER_MINUTE, "m", "minute")
    } else if milliseconds >= MS_PER_SECOND {
        (milliseconds / MS_PER_SECOND, "s", "second")
    } else if milliseconds >= 1.0 {
        (milliseconds, "ms", "millisecond")
    } else if milliseconds >= 0.001 {
        (milliseconds * 1_000.0, "μs", "microsecond")
    } else {
        (milliseconds * 1_000_000.0, "ns", "nanosecond")
    };

    let mut rendered = format!("{value:.2}");
    while rendered.ends_with('0') {
        rendered.pop();
    }
    if rendered.ends_with('.') {
        rendered.pop();
    }

    let unit = match units {
        UnitStyle::Abbreviated => abbreviated.to_string(),
        UnitStyle::Full => {
            if value.floor() == 1.0 && !rendered.contains('.') {
                full.to_string()
            } else {
                format!("{full}s")
            }
        }
    };

    // The underlying clock is not trustworthy at sub-millisecond scale.
    if matches!(abbreviated, "μs" | "ns") {
        rendered.insert(0, '~');
    }

    format!("{rendered} {unit}")
}
