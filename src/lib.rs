//! Timezone Collector Library
//!
//! A small library for inspecting station metadata JSON files and reporting
//! the set of distinct timezone identifiers they reference.
//!
//! This library provides tools for:
//! - Loading station records from a JSON array of objects
//! - Extracting the optional `timezone` field from each record
//! - Deduplicating the extracted values and sorting them lexicographically
//! - Reporting collection statistics alongside the sorted result
//! - Propagating I/O, parse, and shape failures with context

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod timezone_collector;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::StationRecord;
pub use app::services::timezone_collector::{
    TimezoneReport, collect_timezones, find_unique_timezones,
};

/// Result type alias for the timezone collector
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for timezone collection operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// JSON parsing or shape error
    #[error("JSON parsing error in file '{file}': {message}")]
    JsonParsing {
        file: String,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a JSON parsing error with file context
    pub fn json_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<serde_json::Error>,
    ) -> Self {
        Self::JsonParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonParsing {
            file: "unknown".to_string(),
            message: "JSON parsing failed".to_string(),
            source: Some(error),
        }
    }
}
