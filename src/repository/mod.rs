//! Repository layer for database persistence.
//!
//! All database access uses Diesel ORM with compile-time query checking
//! over SQLite, made async via diesel-async's SyncConnectionWrapper.
//! Each collection (text samples, annotations, pairwise comparisons,
//! status checks) is an independent table keyed by an opaque string id.

pub mod annotation;
pub mod comparison;
pub mod context;
pub mod models;
pub mod pool;
pub mod status_check;
pub mod text_sample;
pub mod util;

pub use annotation::AnnotationRepository;
pub use comparison::ComparisonRepository;
pub use context::DbContext;
pub use pool::{AsyncSqlitePool, DieselError};
pub use status_check::StatusCheckRepository;
pub use text_sample::TextSampleRepository;

use chrono::{DateTime, Utc};

/// Encode a datetime for storage as RFC 3339 text.
pub fn encode_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Parse a datetime string from the database, defaulting to Unix epoch on error.
pub fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_round_trip() {
        let now = Utc::now();
        assert_eq!(parse_datetime(&encode_datetime(&now)), now);
    }

    #[test]
    fn test_parse_datetime_invalid_defaults_to_epoch() {
        assert_eq!(parse_datetime("not a date"), DateTime::UNIX_EPOCH);
    }
}
