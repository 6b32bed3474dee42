//! Application constants for the timezone collector
//!
//! This module contains the fixed file and field names used throughout
//! the timezone collector application.

// =============================================================================
// Input File Names and Field Names
// =============================================================================

/// Fixed input file name, resolved against the process working directory
pub const STATIONS_FILE_NAME: &str = "stations.json";

/// Station record field holding the timezone identifier
pub const TIMEZONE_FIELD: &str = "timezone";

// =============================================================================
// Logging Defaults
// =============================================================================

/// Crate name used as the default tracing filter target
pub const LOG_TARGET: &str = "tz_collector";

/// Default log level when neither --verbose nor RUST_LOG is set
pub const DEFAULT_LOG_LEVEL: &str = "warn";
