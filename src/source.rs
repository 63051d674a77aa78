use crate::error::AppError;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use std::fmt;
use std::str::FromStr;

/// A ranking feed published under the same base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Overall,
    Burning,
}

impl Source {
    pub const ALL: [Source; 2] = [Source::Overall, Source::Burning];

    /// File stem of the feed, e.g. `ranking` for `ranking.json`.
    pub fn key(&self) -> &'static str {
        match self {
            Source::Overall => "ranking",
            Source::Burning => "ranking_burning",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Source::Overall => "Overall",
            Source::Burning => "Burning",
        }
    }

    /// Burning world rankings start at 2025-07-05 00:00 JST.
    fn available_from(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Source::Overall => None,
            Source::Burning => FixedOffset::east_opt(9 * 3600)
                .and_then(|jst| jst.with_ymd_and_hms(2025, 7, 5, 0, 0, 0).single()),
        }
    }

    pub fn is_available_at(&self, now: DateTime<Utc>) -> bool {
        match self.available_from() {
            Some(start) => now >= start,
            None => true,
        }
    }

    /// Falls back to the overall ranking when `requested` isn't published yet.
    pub fn resolve(requested: Source, now: DateTime<Utc>) -> Source {
        if requested.is_available_at(now) {
            requested
        } else {
            Source::Overall
        }
    }
}

pub fn available_sources(now: DateTime<Utc>) -> Vec<Source> {
    Source::ALL
        .iter()
        .copied()
        .filter(|s| s.is_available_at(now))
        .collect()
}

impl FromStr for Source {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ranking" | "overall" => Ok(Source::Overall),
            "ranking_burning" | "burning" => Ok(Source::Burning),
            other => Err(AppError::UnknownSource(other.to_string())),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
