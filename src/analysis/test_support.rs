use crate::api::models::Record;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Stable per (name, snapshot), so building a fixture twice gives equal records.
fn record_id(name: &str, timestamp: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    timestamp.hash(&mut hasher);
    hasher.finish()
}

pub fn record(name: &str, rank: u32, level: u32, timestamp: &str) -> Record {
    Record {
        id: record_id(name, timestamp),
        rank,
        name: name.to_string(),
        world: "Scania".to_string(),
        level,
        job: "Hero".to_string(),
        timestamp: timestamp.to_string(),
    }
}

pub fn with_labels(mut rec: Record, world: &str, job: &str) -> Record {
    rec.world = world.to_string();
    rec.job = job.to_string();
    rec
}

/// The three-record scenario: A on two days, B on the second.
pub fn two_day_scenario() -> Vec<Record> {
    vec![
        record("A", 1, 200, "2025-01-01T00:00:00Z"),
        record("A", 1, 205, "2025-01-02T00:00:00Z"),
        record("B", 2, 190, "2025-01-02T00:00:00Z"),
    ]
}
