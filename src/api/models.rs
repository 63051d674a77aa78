use serde::Deserialize;

// One character in one ranking snapshot
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub id: u64,
    pub rank: u32,
    pub name: String,
    pub world: String,
    pub level: u32,
    pub job: String,
    pub timestamp: String,
}

// {source}.json response
#[derive(Debug, Deserialize)]
pub struct RankingResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Record>,
}

// meta.json / meta-{source}.json response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedMeta {
    pub last_updated: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub update_frequency: String,
}

impl FeedMeta {
    pub fn fallback() -> Self {
        FeedMeta {
            last_updated: chrono::Utc::now().to_rfc3339(),
            source: "fallback".to_string(),
            update_frequency: "unknown".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_response_parses() {
        let raw = r#"{
            "success": true,
            "data": [
                {"id": 1, "rank": 1, "name": "Alpha", "world": "Scania", "level": 287,
                 "job": "Hero", "timestamp": "2025-07-01T15:00:00.000Z"}
            ]
        }"#;
        let resp: RankingResponse = serde_json::from_str(raw).unwrap();
        assert!(resp.success);
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].name, "Alpha");
        assert_eq!(resp.data[0].level, 287);
    }

    #[test]
    fn failed_response_without_data_parses() {
        let resp: RankingResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!resp.success);
        assert!(resp.data.is_empty());
    }

    #[test]
    fn meta_parses_camel_case() {
        let raw = r#"{"lastUpdated":"2025-07-02T00:30:00Z","source":"github-actions","updateFrequency":"daily"}"#;
        let meta: FeedMeta = serde_json::from_str(raw).unwrap();
        assert_eq!(meta.update_frequency, "daily");
        assert_eq!(meta.source, "github-actions");
    }
}
