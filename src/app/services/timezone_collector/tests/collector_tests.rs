//! Unit tests for timezone collection behavior

use std::path::Path;

use super::write_stations_file;
use crate::Error;
use crate::app::services::timezone_collector::collect_timezones;

#[test]
fn test_deduplicates_and_sorts() {
    let (_dir, path) = write_stations_file(
        r#"[
            {"timezone": "UTC"},
            {"timezone": "UTC"},
            {"timezone": "America/New_York"}
        ]"#,
    );

    let report = collect_timezones(&path).unwrap();
    assert_eq!(report.timezones, vec!["America/New_York", "UTC"]);
    assert_eq!(report.count(), 2);
}

#[test]
fn test_missing_and_null_fields_contribute_nothing() {
    let (_dir, path) = write_stations_file(r#"[{"name": "A"}, {"timezone": null}]"#);

    let report = collect_timezones(&path).unwrap();
    assert!(report.timezones.is_empty());
    assert_eq!(report.stats.records_scanned, 2);
    assert_eq!(report.stats.records_skipped, 2);
    assert_eq!(report.stats.records_with_timezone, 0);
}

#[test]
fn test_empty_array() {
    let (_dir, path) = write_stations_file("[]");

    let report = collect_timezones(&path).unwrap();
    assert!(report.timezones.is_empty());
    assert_eq!(report.stats.records_scanned, 0);
}

#[test]
fn test_ignores_unrelated_fields() {
    let (_dir, path) = write_stations_file(
        r#"[
            {"name": "Paddington", "lat": 51.5, "timezone": "Europe/London"},
            {"name": "Gare du Nord", "timezone": "Europe/Paris", "platforms": 36}
        ]"#,
    );

    let report = collect_timezones(&path).unwrap();
    assert_eq!(report.timezones, vec!["Europe/London", "Europe/Paris"]);
}

#[test]
fn test_result_is_sorted_and_unique() {
    let (_dir, path) = write_stations_file(
        r#"[
            {"timezone": "Pacific/Auckland"},
            {"timezone": "Africa/Cairo"},
            {"timezone": "Europe/London"},
            {"timezone": "Africa/Cairo"},
            {"timezone": "America/Chicago"},
            {"timezone": "Europe/London"}
        ]"#,
    );

    let report = collect_timezones(&path).unwrap();
    let mut sorted = report.timezones.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(report.timezones, sorted);
    assert_eq!(report.stats.unique_timezones, 4);
    assert_eq!(report.stats.records_with_timezone, 6);
}

#[test]
fn test_idempotent_over_unchanged_file() {
    let (_dir, path) = write_stations_file(
        r#"[{"timezone": "UTC"}, {"timezone": "Asia/Tokyo"}]"#,
    );

    let first = collect_timezones(&path).unwrap();
    let second = collect_timezones(&path).unwrap();
    assert_eq!(first.timezones, second.timezones);
}

#[test]
fn test_missing_file_is_not_found() {
    let result = collect_timezones(Path::new("/nonexistent/stations.json"));
    assert!(matches!(result, Err(Error::FileNotFound { .. })));
}

#[test]
fn test_malformed_json_is_parse_error() {
    let (_dir, path) = write_stations_file("not valid json");

    let result = collect_timezones(&path);
    assert!(matches!(result, Err(Error::JsonParsing { .. })));
}

#[test]
fn test_top_level_object_is_rejected() {
    let (_dir, path) = write_stations_file(r#"{"timezone": "UTC"}"#);

    let result = collect_timezones(&path);
    assert!(matches!(result, Err(Error::JsonParsing { .. })));
}

#[test]
fn test_non_object_entry_is_rejected() {
    let (_dir, path) = write_stations_file(r#"["UTC"]"#);

    let result = collect_timezones(&path);
    assert!(matches!(result, Err(Error::JsonParsing { .. })));
}

#[test]
fn test_non_string_timezone_is_rejected() {
    let (_dir, path) = write_stations_file(r#"[{"timezone": 3600}]"#);

    let result = collect_timezones(&path);
    assert!(matches!(result, Err(Error::JsonParsing { .. })));
}
