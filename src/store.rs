use crate::analysis::name_filter::filter_by_name;
use crate::api::models::{RankingResponse, Record};
use crate::source::Source;
use std::collections::BTreeSet;

/// Rows shown when no name is selected.
pub const DEFAULT_RECENT_WINDOW: usize = 100;

/// Immutable record set for one source, in delivery order.
#[derive(Debug, Clone)]
pub struct RecordStore {
    source: Source,
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new(source: Source, records: Vec<Record>) -> Self {
        RecordStore { source, records }
    }

    /// `None` when the feed failed or is empty.
    pub fn from_response(source: Source, response: RankingResponse) -> Option<Self> {
        if !response.success || response.data.is_empty() {
            return None;
        }
        Some(RecordStore::new(source, response.data))
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The last `count` records in delivery order.
    pub fn recent_window(&self, count: usize) -> &[Record] {
        let start = self.records.len().saturating_sub(count);
        &self.records[start..]
    }

    /// Rows for the table view: the recent window when `name` is empty,
    /// otherwise every record of that name across the whole history.
    pub fn table_view(&self, name: &str, recent: usize) -> Vec<Record> {
        if name.is_empty() {
            self.recent_window(recent).to_vec()
        } else {
            filter_by_name(&self.records, name)
        }
    }

    /// Distinct names, sorted.
    pub fn unique_names(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.name.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
