use chrono::{DateTime, Utc};

/// Display form of a publication timestamp, e.g. `Jan 5, 2026`.
///
/// Formatting is done in UTC so the same post renders the same everywhere.
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}
