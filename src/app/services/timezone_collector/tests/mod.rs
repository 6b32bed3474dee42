//! Tests for the timezone collector service
//!
//! This module provides unit tests for collection and statistics components.

pub mod collector_tests;

// Test helper functions and fixtures
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a stations file with the given contents into a fresh temp directory
///
/// Returns the directory guard alongside the file path so the fixture lives
/// for the duration of the test.
pub fn write_stations_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stations.json");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}
