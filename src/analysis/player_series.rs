use super::timestamps::{parse_instant, DisplayLocale};
use crate::api::models::Record;
use crate::error::AppError;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub display_date: String,
    pub rank: u32,
    pub level: u32,
}

/// One character's rank/level history, one point per calendar day, oldest first.
///
/// The name match is case-sensitive. The calendar day is the date written in
/// the timestamp itself, so it doesn't shift with the display zone. When a day
/// has several snapshots the earliest one is kept.
pub fn build_single_player_series(
    records: &[Record],
    name: &str,
    locale: &DisplayLocale,
) -> Result<Vec<TrendPoint>, AppError> {
    if name.is_empty() {
        return Ok(Vec::new());
    }

    let mut history = records
        .iter()
        .filter(|r| r.name == name)
        .map(|r| parse_instant(&r.timestamp).map(|instant| (instant, r)))
        .collect::<Result<Vec<_>, _>>()?;
    history.sort_by_key(|(instant, _)| *instant);

    let mut by_day = BTreeMap::new();
    for (instant, record) in history {
        by_day
            .entry(instant.date_naive())
            .or_insert_with(|| TrendPoint {
                date: instant.date_naive(),
                display_date: locale.format_month_day(&instant),
                rank: record.rank,
                level: record.level,
            });
    }

    Ok(by_day.into_values().collect())
}

/// Headline figures shown under a character's trend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesHighlights {
    pub days: usize,
    pub best_rank: u32,
    pub latest_rank: u32,
    pub max_level: u32,
    pub latest_level: u32,
}

impl SeriesHighlights {
    pub fn from_points(points: &[TrendPoint]) -> Option<Self> {
        let latest = points.last()?;
        Some(SeriesHighlights {
            days: points.len(),
            best_rank: points.iter().map(|p| p.rank).min()?,
            latest_rank: latest.rank,
            max_level: points.iter().map(|p| p.level).max()?,
            latest_level: latest.level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::{record, two_day_scenario};
    use std::collections::HashSet;

    #[test]
    fn scenario_series() {
        let points =
            build_single_player_series(&two_day_scenario(), "A", &DisplayLocale::utc()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points.iter().map(|p| p.rank).collect::<Vec<_>>(), vec![1, 1]);
        assert_eq!(points.iter().map(|p| p.level).collect::<Vec<_>>(), vec![200, 205]);
        assert!(points[0].date < points[1].date);
        assert_eq!(points[0].display_date, "01/01");
    }

    #[test]
    fn earliest_snapshot_of_the_day_wins() {
        // Delivered newest first on purpose
        let records = vec![
            record("A", 4, 203, "2025-01-02T23:00:00Z"),
            record("A", 3, 202, "2025-01-02T12:00:00Z"),
            record("A", 5, 201, "2025-01-02T01:00:00Z"),
            record("A", 6, 200, "2025-01-01T12:00:00Z"),
        ];
        let points = build_single_player_series(&records, "A", &DisplayLocale::utc()).unwrap();
        let dates: HashSet<_> = points.iter().map(|p| p.date).collect();
        assert_eq!(dates.len(), points.len());
        assert_eq!(points.len(), 2);
        assert_eq!((points[1].rank, points[1].level), (5, 201));
    }

    #[test]
    fn day_comes_from_timestamp_offset() {
        // 23:30 at +09:00 is 14:30 UTC the same day; both stay on the written date
        let records = vec![
            record("A", 1, 200, "2025-03-10T23:30:00+09:00"),
            record("A", 2, 201, "2025-03-11T00:10:00+09:00"),
        ];
        let points = build_single_player_series(&records, "A", &DisplayLocale::utc()).unwrap();
        let dates: Vec<String> = points.iter().map(|p| p.date.to_string()).collect();
        assert_eq!(dates, vec!["2025-03-10", "2025-03-11"]);
    }

    #[test]
    fn name_match_is_case_sensitive() {
        let points =
            build_single_player_series(&two_day_scenario(), "a", &DisplayLocale::utc()).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn empty_or_unknown_name_is_empty() {
        let records = two_day_scenario();
        let locale = DisplayLocale::utc();
        assert!(build_single_player_series(&records, "", &locale).unwrap().is_empty());
        assert!(build_single_player_series(&records, "Nobody", &locale).unwrap().is_empty());
    }

    #[test]
    fn bad_timestamp_for_target_surfaces() {
        let records = vec![record("A", 1, 200, "01/02/2025")];
        assert!(build_single_player_series(&records, "A", &DisplayLocale::utc()).is_err());
    }

    #[test]
    fn highlights_track_best_and_latest() {
        let records = vec![
            record("A", 7, 200, "2025-01-01T00:00:00Z"),
            record("A", 2, 204, "2025-01-02T00:00:00Z"),
            record("A", 3, 206, "2025-01-03T00:00:00Z"),
        ];
        let points = build_single_player_series(&records, "A", &DisplayLocale::utc()).unwrap();
        let highlights = SeriesHighlights::from_points(&points).unwrap();
        assert_eq!(
            highlights,
            SeriesHighlights {
                days: 3,
                best_rank: 2,
                latest_rank: 3,
                max_level: 206,
                latest_level: 206,
            }
        );
        assert!(SeriesHighlights::from_points(&[]).is_none());
    }
}
