//! Shared components for CLI commands
//!
//! This module contains logging setup and report formatting used by the
//! command implementations.

use tracing::debug;

use crate::Result;
use crate::app::services::timezone_collector::TimezoneReport;
use crate::cli::args::Args;
use crate::constants::LOG_TARGET;

/// Set up structured logging for the CLI
///
/// Logs go to stderr; stdout is reserved for the report output.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter, honoring an explicit environment override
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Render the report in the fixed output format
///
/// First line is the count header, followed by one timezone per line in the
/// report's (sorted) order.
pub fn format_report(report: &TimezoneReport) -> String {
    let mut output = format!("Found {} unique timezones:\n", report.count());
    for timezone in &report.timezones {
        output.push_str(timezone);
        output.push('\n');
    }
    output
}
