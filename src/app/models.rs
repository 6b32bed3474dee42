//! Data models for timezone collection
//!
//! This module contains the data structure representing a single station
//! record as it appears in the input JSON array. Records carry arbitrary
//! fields; only the timezone field is consulted during collection.

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// Station Record Structure
// =============================================================================

/// One entry of the input JSON array
///
/// A station record is an unordered mapping from field name to value. The
/// `timezone` field is the only one the collector reads; everything else is
/// retained in `extra` and ignored. A `timezone` that is absent or JSON null
/// deserializes to `None`; a present non-string value is a deserialization
/// error, which the collector propagates as a shape failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationRecord {
    /// IANA-style timezone identifier, if the record carries one (not validated)
    #[serde(default)]
    pub timezone: Option<String>,

    /// All remaining fields of the record, ignored by the collector
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl StationRecord {
    /// Return the record's timezone identifier, if present and non-null
    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }
}
