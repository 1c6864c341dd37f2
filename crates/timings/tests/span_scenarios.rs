//! End-to-end scenarios for the timings registry
//!
//! These tests measure real elapsed intervals around `thread::sleep`, the
//! way an application times work it delegates elsewhere.

use std::thread::sleep;
use std::time::Duration;

use timings::{Timings, UnitStyle, NOT_STARTED_RESULT};

fn parse_result(result: &str) -> (f64, String) {
    let (number, unit) = result
        .split_once(' ')
        .unwrap_or_else(|| panic!("malformed result: {result}"));
    let number = number.strip_prefix('~').unwrap_or(number);
    (number.parse().unwrap(), unit.to_string())
}

#[test]
fn measured_span_tracks_real_elapsed_time() {
    let mut timings = Timings::new(["a", "b"]).unwrap();

    timings.start(&["a"]);
    sleep(Duration::from_millis(50));
    timings.end(&["a"]);

    let result = timings.get_result(&"a", UnitStyle::Abbreviated);
    let (value, unit) = parse_result(&result);
    assert_eq!(unit, "ms", "unexpected result: {result}");
    assert!(value >= 45.0, "span too short: {result}");
    assert!(value < 5_000.0, "span too long: {result}");

    // "b" was never started.
    assert_eq!(
        timings.get_result(&"b", UnitStyle::Abbreviated),
        NOT_STARTED_RESULT
    );
}

#[test]
fn snapshot_covers_only_completed_spans() {
    let mut timings = Timings::new(["fetch", "parse", "render"]).unwrap();

    timings.start_all();
    sleep(Duration::from_millis(20));
    timings.end(&["fetch", "parse"]);

    let results = timings.get_results(UnitStyle::Full);
    assert_eq!(results.len(), 2);
    assert!(results.contains_key("RESULT__fetch"));
    assert!(results.contains_key("RESULT__parse"));
    assert!(!results.contains_key("RESULT__render"));

    // Both spans ended on the same clock sample, so their strings match.
    assert_eq!(results["RESULT__fetch"], results["RESULT__parse"]);
}

#[test]
fn reset_allows_a_slot_to_be_reused() {
    let mut timings = Timings::new(["work"]).unwrap();

    timings.start(&["work"]);
    sleep(Duration::from_millis(30));
    timings.end(&["work"]);
    let first = timings.get_data(&"work").unwrap().elapsed_ms().unwrap();

    timings.reset(&["work"]);
    timings.start(&["work"]);
    sleep(Duration::from_millis(5));
    timings.end(&["work"]);
    let second = timings.get_data(&"work").unwrap().elapsed_ms().unwrap();

    assert!(first >= 25.0);
    assert!(second >= 4.0);
    assert!(second < first);
}

#[test]
fn string_identifiers_work_through_the_same_api() {
    let mut timings = Timings::new(vec!["first pass".to_string(), "second pass".to_string()])
        .unwrap();

    let ids = ["first pass".to_string(), "second pass".to_string()];
    timings.start(&ids);
    sleep(Duration::from_millis(10));
    timings.end(&ids);

    let results = timings.get_results(UnitStyle::Abbreviated);
    assert!(results.contains_key("RESULT__first_pass"));
    assert!(results.contains_key("RESULT__second_pass"));
}
