//! Row conversion helpers shared by the query modules.

use jiff::{fmt::temporal::DateTimePrinter, Timestamp};
use rusqlite::{types::Type, Row};

/// Formats a timestamp as RFC 3339 UTC with nanosecond precision.
///
/// A fixed width keeps text order equal to time order in `ORDER BY`.
pub(crate) fn timestamp_text(timestamp: &Timestamp) -> String {
    DateTimePrinter::new()
        .precision(Some(9))
        .timestamp_to_string(timestamp)
}

/// Reads an RFC 3339 text column as a `Timestamp`.
pub(crate) fn timestamp_column(row: &Row<'_>, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

/// Reads a JSON text column into any deserializable type.
pub(crate) fn json_column<T: serde::de::DeserializeOwned>(
    row: &Row<'_>,
    index: usize,
) -> rusqlite::Result<T> {
    let text: String = row.get(index)?;
    serde_json::from_str(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

/// Reads a non-negative integer column as `u64`.
pub(crate) fn id_column(row: &Row<'_>, index: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(index)? as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_text_has_fixed_width() {
        let whole: Timestamp = "2026-03-01T09:00:00Z".parse().unwrap();
        let fraction: Timestamp = "2026-03-01T09:00:00.5Z".parse().unwrap();

        assert_eq!(timestamp_text(&whole), "2026-03-01T09:00:00.000000000Z");
        assert_eq!(timestamp_text(&fraction), "2026-03-01T09:00:00.500000000Z");
        assert!(timestamp_text(&whole) < timestamp_text(&fraction));
        assert_eq!(timestamp_text(&fraction).parse::<Timestamp>().unwrap(), fraction);
    }
}
