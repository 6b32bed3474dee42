//! Collection statistics and report structures for the timezone collector
//!
//! This module provides types for tracking how many records were scanned,
//! how many contributed a timezone, and how long the collection took.

/// Statistics for a single timezone collection pass
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionStats {
    /// Total number of station records in the input file
    pub records_scanned: usize,

    /// Number of records carrying a non-null timezone field
    pub records_with_timezone: usize,

    /// Number of records with the field absent or null
    pub records_skipped: usize,

    /// Number of distinct timezone values after deduplication
    pub unique_timezones: usize,

    /// Time taken to load and collect
    pub duration: std::time::Duration,
}

impl CollectionStats {
    /// Create new empty collection statistics
    pub fn new() -> Self {
        Self {
            records_scanned: 0,
            records_with_timezone: 0,
            records_skipped: 0,
            unique_timezones: 0,
            duration: std::time::Duration::ZERO,
        }
    }

    /// Fraction of records that contributed a timezone, as a percentage
    pub fn coverage_rate(&self) -> f64 {
        if self.records_scanned == 0 {
            0.0
        } else {
            (self.records_with_timezone as f64 / self.records_scanned as f64) * 100.0
        }
    }

    /// One-line human summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} unique timezones from {} records ({} with timezone, {} skipped, {:.1}% coverage) in {:.3}s",
            self.unique_timezones,
            self.records_scanned,
            self.records_with_timezone,
            self.records_skipped,
            self.coverage_rate(),
            self.duration.as_secs_f64()
        )
    }
}

impl Default for CollectionStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a timezone collection pass
///
/// Carries the sorted, deduplicated timezone identifiers along with the
/// statistics gathered while producing them.
#[derive(Debug, Clone, PartialEq)]
pub struct TimezoneReport {
    /// Distinct timezone identifiers in ascending lexicographic order
    pub timezones: Vec<String>,

    /// Statistics from the collection pass
    pub stats: CollectionStats,
}

impl TimezoneReport {
    /// Number of unique timezones in the report
    pub fn count(&self) -> usize {
        self.timezones.len()
    }
}
