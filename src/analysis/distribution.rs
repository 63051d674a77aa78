use crate::api::models::Record;
use std::cmp::Reverse;
use std::collections::HashMap;

pub const MAX_JOBS: usize = 49;
pub const MAX_WORLDS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

fn count_by<F>(records: &[Record], key: F) -> HashMap<String, usize>
where
    F: Fn(&Record) -> String,
{
    let mut counts = HashMap::new();
    for record in records {
        *counts.entry(key(record)).or_insert(0) += 1;
    }
    counts
}

/// Most common first, ties broken by label.
fn most_common(counts: HashMap<String, usize>, limit: usize) -> Vec<CategoryCount> {
    let mut entries: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(label, count)| CategoryCount { label, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    entries.truncate(limit);
    entries
}

pub fn count_by_job(records: &[Record]) -> Vec<CategoryCount> {
    most_common(count_by(records, |r| r.job.clone()), MAX_JOBS)
}

pub fn count_by_world(records: &[Record]) -> Vec<CategoryCount> {
    most_common(count_by(records, |r| r.world.clone()), MAX_WORLDS)
}

/// `(level, count)`, highest level first.
pub fn count_by_level(records: &[Record]) -> Vec<(u32, usize)> {
    let mut counts: HashMap<u32, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.level).or_insert(0) += 1;
    }
    let mut levels: Vec<(u32, usize)> = counts.into_iter().collect();
    levels.sort_by_key(|&(level, _)| Reverse(level));
    levels
}
