//! Timezone extraction, deduplication, and ordering
//!
//! This module loads a station metadata JSON file and reduces it to the
//! sorted set of distinct timezone identifiers its records reference.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use super::stats::{CollectionStats, TimezoneReport};
use crate::app::models::StationRecord;
use crate::constants::{STATIONS_FILE_NAME, TIMEZONE_FIELD};
use crate::{Error, Result};

/// Collect the unique timezones referenced by a station metadata file
///
/// Loads the file as a JSON array of station records, extracts each record's
/// non-null `timezone` field, deduplicates the values, and returns them in
/// ascending lexicographic order together with collection statistics.
///
/// # Arguments
/// * `path` - Path to the station metadata JSON file
///
/// # Errors
/// * Returns `Error::FileNotFound` if the file does not exist
/// * Returns `Error::Io` if the file cannot be opened or read
/// * Returns `Error::JsonParsing` if the contents are not a JSON array of
///   objects, or a `timezone` value is present but not a string
pub fn collect_timezones(path: &Path) -> Result<TimezoneReport> {
    let start_time = Instant::now();

    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    info!("Loading station records from {}", path.display());

    let records = load_station_records(path)?;
    debug!(
        "Loaded {} station records, extracting '{}' field",
        records.len(),
        TIMEZONE_FIELD
    );

    let mut stats = CollectionStats::new();
    stats.records_scanned = records.len();

    // BTreeSet keeps the values deduplicated and ordered in one pass;
    // String's Ord is ascending lexicographic order.
    let mut timezones: BTreeSet<String> = BTreeSet::new();

    for record in records {
        match record.timezone {
            Some(timezone) => {
                stats.records_with_timezone += 1;
                timezones.insert(timezone);
            }
            None => {
                stats.records_skipped += 1;
            }
        }
    }

    stats.unique_timezones = timezones.len();
    stats.duration = start_time.elapsed();

    debug!("Collection complete: {}", stats.summary());

    Ok(TimezoneReport {
        timezones: timezones.into_iter().collect(),
        stats,
    })
}

/// Collect unique timezones from `stations.json` in the working directory
///
/// Fixed-input convenience wrapper around [`collect_timezones`], returning
/// the sorted sequence alone.
pub fn find_unique_timezones() -> Result<Vec<String>> {
    collect_timezones(Path::new(STATIONS_FILE_NAME)).map(|report| report.timezones)
}

/// Parse the file as a JSON array of station records
///
/// The reader is dropped on all paths, including parse failure, so the file
/// handle never outlives this call.
fn load_station_records(path: &Path) -> Result<Vec<StationRecord>> {
    let file = File::open(path)
        .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|e| {
        Error::json_parsing(
            path.display().to_string(),
            "expected a JSON array of station record objects",
            Some(e),
        )
    })
}
