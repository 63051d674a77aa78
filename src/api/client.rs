use crate::config::Config;
use crate::error::AppError;
use crate::source::Source;
use crate::store::RecordStore;
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

use super::endpoints::{meta_url, ranking_url};
use super::models::*;

const MAX_RETRIES: u32 = 3;

pub struct RankingClient {
    config: Config,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    clock: DefaultClock,
}

impl RankingClient {
    pub fn new(config: Config) -> Self {
        // Static hosting, so stay polite: at most 4 requests per second
        let quota = Quota::with_period(Duration::from_millis(250))
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN));
        let clock = DefaultClock::default();
        RankingClient {
            config,
            rate_limiter: RateLimiter::direct_with_clock(quota, clock.clone()),
            clock,
        }
    }

    fn wait_for_permit(&self) {
        while let Err(not_until) = self.rate_limiter.check() {
            thread::sleep(not_until.wait_time_from(self.clock.now()));
        }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        let mut retry_count = 0;

        loop {
            self.wait_for_permit();

            let response = ureq::get(url)
                .set("User-Agent", "ranking_trend/0.1.0")
                .call();

            match response {
                Ok(resp) => {
                    return resp
                        .into_string()
                        .map_err(|e| AppError::HttpError(e.to_string()));
                }
                Err(ureq::Error::Status(429, _)) => {
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::RateLimited);
                    }
                    let wait_ms = 2000 * (retry_count + 1) as u64;
                    thread::sleep(Duration::from_millis(wait_ms));
                    retry_count += 1;
                }
                Err(ureq::Error::Status(code, _)) => {
                    return Err(AppError::HttpError(format!("{} returned status {}", url, code)));
                }
                Err(e) => {
                    return Err(AppError::HttpError(e.to_string()));
                }
            }
        }
    }

    /// Fetch the feed for `source`.
    ///
    /// Returns `Ok(None)` when the feed reports `success: false` or carries no
    /// rows; callers treat that as "no data" rather than an error.
    pub fn fetch_records(&self, source: Source) -> Result<Option<RecordStore>, AppError> {
        let url = ranking_url(&self.config.base_url, source);
        let body = self.execute_request(&url)?;
        let response: RankingResponse =
            serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))?;

        Ok(RecordStore::from_response(source, response))
    }

    /// Fetch feed metadata, falling back to a placeholder on any failure.
    pub fn fetch_meta(&self, source: Source) -> FeedMeta {
        let url = meta_url(&self.config.base_url, source);
        self.execute_request(&url)
            .and_then(|body| {
                serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))
            })
            .unwrap_or_else(|_| FeedMeta::fallback())
    }
}
