//! Identifier and timestamp generation.
//!
//! # Responsibility
//! - Mint opaque, globally unique record identifiers.
//! - Produce ISO-8601 timestamps in one stable textual format.
//!
//! # Invariants
//! - Generated ids are random UUID v4 strings and are never reused.
//! - Timestamps are UTC with millisecond precision and a `Z` suffix, so
//!   values produced by this module sort lexicographically by instant.

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

/// Opaque record identifier.
///
/// Stored as plain text so documents written by other tools round-trip
/// without reinterpretation.
pub type EntityId = String;

/// ISO-8601 timestamp text, e.g. `2024-05-01T09:30:00.125Z`.
pub type Timestamp = String;

/// Returns a fresh random identifier.
pub fn new_id() -> EntityId {
    Uuid::new_v4().to_string()
}

/// Returns the current wall-clock time formatted for persistence.
pub fn now_timestamp() -> Timestamp {
    format_timestamp(Utc::now())
}

/// Formats an instant using the persisted timestamp layout.
pub fn format_timestamp(instant: DateTime<Utc>) -> Timestamp {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a persisted timestamp.
///
/// Returns `None` for text that is not RFC 3339; callers sorting by time
/// treat such records as oldest.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::{format_timestamp, new_id, now_timestamp, parse_timestamp};
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;

    #[test]
    fn new_id_is_unique_across_many_calls() {
        let ids: HashSet<_> = (0..1_000).map(|_| new_id()).collect();
        assert_eq!(ids.len(), 1_000);
        assert!(ids.iter().all(|id| !id.is_empty()));
    }

    #[test]
    fn timestamp_uses_millisecond_utc_layout() {
        let instant = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        assert_eq!(format_timestamp(instant), "2024-05-01T09:30:00.000Z");
    }

    #[test]
    fn now_timestamp_parses_back() {
        let stamp = now_timestamp();
        assert!(stamp.ends_with('Z'));
        assert!(parse_timestamp(&stamp).is_some());
    }

    #[test]
    fn parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
    }
}
