//! Command-line argument definitions for the timezone collector
//!
//! This module defines the CLI interface using the clap derive API. The
//! report itself is not configurable: the input file name and output format
//! are fixed, and the only arguments are logging verbosity controls.

use clap::Parser;

use crate::constants::DEFAULT_LOG_LEVEL;

/// CLI arguments for the timezone collector
///
/// Reads `stations.json` from the working directory and prints the distinct
/// timezone identifiers it references, sorted, with a count.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tz-collector",
    version,
    about = "Report the unique timezones referenced by a station metadata file",
    long_about = "Reads stations.json from the current working directory, extracts the \
                  optional `timezone` field from each station record, and prints the \
                  deduplicated values in ascending lexicographic order together with a count."
)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress all logging except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Only show errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Map verbosity flags to a tracing filter level
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => DEFAULT_LOG_LEVEL,
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            verbose: 0,
            quiet: false,
        }
    }
}
