//! Command implementations for the timezone collector CLI
//!
//! This module contains the command execution logic and error handling for
//! the CLI interface. The tool has a single command, the timezone report,
//! implemented in its own module alongside shared logging setup.

pub mod report;
pub mod shared;

use crate::Result;
use crate::app::services::timezone_collector::CollectionStats;
use crate::cli::args::Args;

/// Main command runner for the timezone collector
///
/// Sets up logging and runs the report. Returns the collection statistics
/// for the caller to inspect; the report itself has already been written to
/// stdout.
pub fn run(args: Args) -> Result<CollectionStats> {
    shared::setup_logging(&args)?;
    report::run_report()
}
