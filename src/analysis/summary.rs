use super::timestamps::{parse_instant, DisplayLocale};
use crate::api::models::Record;
use crate::error::AppError;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryStats {
    pub unique_entity_count: usize,
    pub earliest_date: String,
    pub latest_date: String,
    pub min_level: u32,
    pub max_level: u32,
}

/// Headline numbers for a record set. Empty input yields the default.
pub fn summarize(records: &[Record], locale: &DisplayLocale) -> Result<SummaryStats, AppError> {
    if records.is_empty() {
        return Ok(SummaryStats::default());
    }

    let unique_entity_count = records
        .iter()
        .map(|r| r.name.as_str())
        .collect::<HashSet<_>>()
        .len();

    let mut earliest = None;
    let mut latest = None;
    for record in records {
        let instant = parse_instant(&record.timestamp)?;
        if earliest.map_or(true, |e| instant < e) {
            earliest = Some(instant);
        }
        if latest.map_or(true, |l| instant > l) {
            latest = Some(instant);
        }
    }

    // True min/max over every record. Do not derive these from the ends of a
    // sorted view: the feed isn't sorted by level.
    let min_level = records.iter().map(|r| r.level).min().unwrap_or(0);
    let max_level = records.iter().map(|r| r.level).max().unwrap_or(0);

    Ok(SummaryStats {
        unique_entity_count,
        earliest_date: earliest.map(|i| locale.format_date(&i)).unwrap_or_default(),
        latest_date: latest.map(|i| locale.format_date(&i)).unwrap_or_default(),
        min_level,
        max_level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::{record, two_day_scenario};

    #[test]
    fn scenario_summary() {
        let stats = summarize(&two_day_scenario(), &DisplayLocale::utc()).unwrap();
        assert_eq!(stats.unique_entity_count, 2);
        assert_eq!(stats.min_level, 190);
        assert_eq!(stats.max_level, 205);
        assert_eq!(stats.earliest_date, "2025/1/1");
        assert_eq!(stats.latest_date, "2025/1/2");
    }

    #[test]
    fn empty_input_is_zeroed() {
        let stats = summarize(&[], &DisplayLocale::utc()).unwrap();
        assert_eq!(stats, SummaryStats::default());
        assert_eq!(stats.min_level, 0);
        assert_eq!(stats.max_level, 0);
        assert!(stats.earliest_date.is_empty());
    }

    #[test]
    fn level_range_ignores_input_order() {
        let records = vec![
            record("A", 1, 250, "2025-01-03T00:00:00Z"),
            record("B", 2, 210, "2025-01-01T00:00:00Z"),
            record("C", 3, 290, "2025-01-02T00:00:00Z"),
            record("D", 4, 230, "2025-01-02T00:00:00Z"),
        ];
        let stats = summarize(&records, &DisplayLocale::utc()).unwrap();
        assert_eq!((stats.min_level, stats.max_level), (210, 290));
        assert!(stats.min_level <= stats.max_level);
        // Dates come from the timestamps, not array position
        assert_eq!(stats.earliest_date, "2025/1/1");
        assert_eq!(stats.latest_date, "2025/1/3");
    }

    #[test]
    fn malformed_timestamp_is_an_error() {
        let records = vec![
            record("A", 1, 250, "2025-01-03T00:00:00Z"),
            record("B", 2, 210, "not a date"),
        ];
        assert!(matches!(
            summarize(&records, &DisplayLocale::utc()),
            Err(AppError::InvalidTimestamp { .. })
        ));
    }
}
