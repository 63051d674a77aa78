use crate::error::AppError;
use crate::source::Source;
use chrono::FixedOffset;
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://r-eco-maple.github.io/ranking";
const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub source: Source,
    /// Zone used when rendering viewer-facing dates.
    pub display_offset: FixedOffset,
}

impl Config {
    /// `source_flag` wins over `RANKING_SOURCE`; the env value is only parsed
    /// when no flag is given.
    pub fn from_env(source_flag: Option<&str>) -> Result<Self, AppError> {
        if dotenvy::dotenv().is_err() {
            // No local .env, try the per-user one
            if let Some(dir) = dirs::config_dir() {
                dotenvy::from_path(dir.join("ranking_trend").join(".env")).ok();
            }
        }

        let base_url = env::var("RANKING_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let source = select_source(source_flag, env::var("RANKING_SOURCE").ok().as_deref())?;

        let display_offset = match env::var("RANKING_UTC_OFFSET_HOURS") {
            Ok(raw) => parse_offset_hours(&raw)?,
            Err(_) => offset_from_hours(DEFAULT_UTC_OFFSET_HOURS)?,
        };

        Ok(Config {
            base_url,
            source,
            display_offset,
        })
    }
}

fn select_source(flag: Option<&str>, env_value: Option<&str>) -> Result<Source, AppError> {
    match flag.or(env_value) {
        Some(raw) => raw.parse::<Source>(),
        None => Ok(Source::Overall),
    }
}

fn parse_offset_hours(raw: &str) -> Result<FixedOffset, AppError> {
    let hours: i32 = raw.trim().parse().map_err(|_| {
        AppError::ConfigError(format!(
            "RANKING_UTC_OFFSET_HOURS must be an integer, got {:?}",
            raw
        ))
    })?;
    offset_from_hours(hours)
}

fn offset_from_hours(hours: i32) -> Result<FixedOffset, AppError> {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| {
            AppError::ConfigError(format!(
                "RANKING_UTC_OFFSET_HOURS out of range (-23..=23): {}",
                hours
            ))
        })
}
