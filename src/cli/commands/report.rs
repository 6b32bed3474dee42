//! Report command implementation for the timezone collector CLI
//!
//! Runs the collection pass over the fixed input file and writes the
//! timezone report to stdout.

use std::path::Path;

use tracing::info;

use crate::Result;
use crate::app::services::timezone_collector::{CollectionStats, collect_timezones};
use crate::cli::commands::shared::format_report;
use crate::constants::STATIONS_FILE_NAME;

/// Run the timezone report
///
/// Collects the unique timezones from `stations.json` in the working
/// directory and prints them. Nothing is printed if collection fails; the
/// error propagates to the caller instead.
pub fn run_report() -> Result<CollectionStats> {
    info!("Starting timezone report for {}", STATIONS_FILE_NAME);

    let report = collect_timezones(Path::new(STATIONS_FILE_NAME))?;

    print!("{}", format_report(&report));

    info!("Timezone report completed: {}", report.stats.summary());

    Ok(report.stats)
}
