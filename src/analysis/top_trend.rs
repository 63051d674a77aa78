use super::timestamps::{parse_instant, DisplayLocale};
use crate::api::models::Record;
use crate::error::AppError;
use chrono::{DateTime, FixedOffset};
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_WINDOW: usize = 7;
pub const DEFAULT_TOP: usize = 10;

/// Line colours, handed out by roster position.
pub const PALETTE: [&str; 10] = [
    "#667eea", "#4cd497", "#f59e0b", "#ef4444", "#3b82f6", "#8b5cf6", "#ec4899", "#06b6d4",
    "#84cc16", "#f97316",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    pub color_index: usize,
}

impl RosterEntry {
    pub fn color(&self) -> &'static str {
        PALETTE[self.color_index % PALETTE.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankCell {
    /// Rank capped at the roster size; also used when the entity is absent.
    pub clamped_rank: u32,
    /// `None` when the entity isn't in this snapshot.
    pub actual_rank: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedRow {
    pub date: DateTime<FixedOffset>,
    pub display_date: String,
    /// One cell per roster entry, same order as [`TopNTrend::roster`].
    pub ranks: Vec<RankCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopNTrend {
    pub rows: Vec<DatedRow>,
    pub roster: Vec<RosterEntry>,
}

impl TopNTrend {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell for `name` in `row`, if `name` is on the roster.
    #[cfg(test)]
    pub fn cell(&self, row: &DatedRow, name: &str) -> Option<RankCell> {
        let position = self.roster.iter().position(|e| e.name == name)?;
        row.ranks.get(position).copied()
    }
}

/// Rank movement of the latest snapshot's top `top` over the last `window` snapshots.
///
/// The roster is fixed from the latest snapshot and never recomputed per row,
/// so every row carries the same names. Ranks past `top` and missing entries
/// both sit at `top`; `actual_rank` tells them apart.
pub fn build_top_n_trend(
    records: &[Record],
    window: usize,
    top: usize,
    locale: &DisplayLocale,
) -> Result<TopNTrend, AppError> {
    if window == 0 || top == 0 {
        return Ok(TopNTrend::default());
    }

    let mut snapshots: BTreeMap<DateTime<FixedOffset>, Vec<&Record>> = BTreeMap::new();
    for record in records {
        let instant = parse_instant(&record.timestamp)?;
        snapshots.entry(instant).or_default().push(record);
    }

    let skip = snapshots.len().saturating_sub(window);
    let recent: Vec<(&DateTime<FixedOffset>, &Vec<&Record>)> =
        snapshots.iter().skip(skip).collect();

    let Some((_, latest)) = recent.last() else {
        return Ok(TopNTrend::default());
    };

    let mut leaders: Vec<&Record> = latest.to_vec();
    leaders.sort_by_key(|r| r.rank);
    let roster: Vec<RosterEntry> = leaders
        .iter()
        .take(top)
        .enumerate()
        .map(|(position, r)| RosterEntry {
            name: r.name.clone(),
            color_index: position % PALETTE.len(),
        })
        .collect();

    let boundary = u32::try_from(top).unwrap_or(u32::MAX);
    let rows = recent
        .iter()
        .map(|(instant, snapshot)| {
            let ranks_by_name: HashMap<&str, u32> =
                snapshot.iter().map(|r| (r.name.as_str(), r.rank)).collect();
            let ranks = roster
                .iter()
                .map(|entry| match ranks_by_name.get(entry.name.as_str()) {
                    Some(&rank) => RankCell {
                        clamped_rank: rank.min(boundary),
                        actual_rank: Some(rank),
                    },
                    None => RankCell {
                        clamped_rank: boundary,
                        actual_rank: None,
                    },
                })
                .collect();
            DatedRow {
                date: **instant,
                display_date: locale.format_month_day(instant),
                ranks,
            }
        })
        .collect();

    Ok(TopNTrend { rows, roster })
}
