use crate::api::models::Record;

/// Records whose name equals `name`, ignoring case. An empty name keeps everything.
///
/// Exact match only; use [`suggest_names`] for prefix search.
pub fn filter_by_name(records: &[Record], name: &str) -> Vec<Record> {
    if name.is_empty() {
        return records.to_vec();
    }

    let wanted = name.to_lowercase();
    records
        .iter()
        .filter(|r| r.name.to_lowercase() == wanted)
        .cloned()
        .collect()
}

/// Names starting with `prefix` (case-insensitive), in input order, at most `limit`.
pub fn suggest_names<'a>(names: &[&'a str], prefix: &str, limit: usize) -> Vec<&'a str> {
    let prefix = prefix.to_lowercase();
    names
        .iter()
        .copied()
        .filter(|n| n.to_lowercase().starts_with(&prefix))
        .take(limit)
        .collect()
}
