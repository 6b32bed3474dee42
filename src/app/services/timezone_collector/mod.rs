//! Timezone collection service
//!
//! This module implements the full inspection pipeline for station metadata
//! JSON files: load the records, extract each record's optional timezone
//! field, deduplicate the values, and return them in ascending lexicographic
//! order together with collection statistics.
//!
//! # Architecture
//!
//! The module is organized into logical components:
//! - [`collector`] - Loading, extraction, dedupe, and sort
//! - [`stats`] - Collection statistics and the report structure
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tz_collector::app::services::timezone_collector::collect_timezones;
//!
//! # fn example() -> tz_collector::Result<()> {
//! let report = collect_timezones(Path::new("stations.json"))?;
//!
//! println!("Found {} unique timezones:", report.timezones.len());
//! for timezone in &report.timezones {
//!     println!("{}", timezone);
//! }
//! # Ok(())
//! # }
//! ```

pub mod collector;
pub mod stats;

#[cfg(test)]
mod tests;

pub use collector::{collect_timezones, find_unique_timezones};
pub use stats::{CollectionStats, TimezoneReport};
