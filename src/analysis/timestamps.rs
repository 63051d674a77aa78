use crate::error::AppError;
use chrono::{DateTime, FixedOffset, NaiveDateTime};

/// Parse a snapshot timestamp.
///
/// RFC 3339 instants are taken as-is. A timestamp without an offset is read
/// as UTC. Anything else is an error; callers must not substitute a default.
pub fn parse_instant(value: &str) -> Result<DateTime<FixedOffset>, AppError> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(instant) => Ok(instant),
        Err(source) => NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc().fixed_offset())
            .map_err(|_| AppError::InvalidTimestamp {
                value: value.to_string(),
                source,
            }),
    }
}

/// Viewer-facing date formatting (ja-JP style) in a fixed zone.
#[derive(Debug, Clone, Copy)]
pub struct DisplayLocale {
    offset: FixedOffset,
}

impl DisplayLocale {
    pub fn new(offset: FixedOffset) -> Self {
        DisplayLocale { offset }
    }

    #[cfg(test)]
    pub fn utc() -> Self {
        use chrono::{Offset, Utc};
        DisplayLocale::new(Utc.fix())
    }

    /// `2025/7/1`
    pub fn format_date(&self, instant: &DateTime<FixedOffset>) -> String {
        instant
            .with_timezone(&self.offset)
            .format("%Y/%-m/%-d")
            .to_string()
    }

    /// `07/01`
    pub fn format_month_day(&self, instant: &DateTime<FixedOffset>) -> String {
        instant.with_timezone(&self.offset).format("%m/%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_and_naive() {
        let zulu = parse_instant("2025-07-01T15:00:00.000Z").unwrap();
        let naive = parse_instant("2025-07-01T15:00:00").unwrap();
        assert_eq!(zulu, naive);
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_instant("yesterday").unwrap_err();
        match err {
            AppError::InvalidTimestamp { value, .. } => assert_eq!(value, "yesterday"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn formats_in_display_zone() {
        let jst = DisplayLocale::new(FixedOffset::east_opt(9 * 3600).unwrap());
        let instant = parse_instant("2025-07-01T15:00:00Z").unwrap();
        assert_eq!(jst.format_date(&instant), "2025/7/2");
        assert_eq!(jst.format_month_day(&instant), "07/02");
        assert_eq!(DisplayLocale::utc().format_month_day(&instant), "07/01");
    }
}
