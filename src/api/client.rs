use crate::analysis::team_stats::TeamStats;
use crate::config::Config;
use crate::error::AppError;
use governor::{Quota, RateLimiter, state::{InMemoryState, NotKeyed}, clock::DefaultClock};
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::endpoints::team_summary_url;
use super::models::*;

const MAX_RETRIES: u32 = 3;
const COURTESY_DELAY: Duration = Duration::from_millis(150);

pub struct NhlApiClient {
    config: Config,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl NhlApiClient {
    pub fn new(config: Config) -> Self {
        // The stats API publishes no quota; stay polite at 5 req/sec
        let rate_limiter = RateLimiter::direct(Quota::per_second(NonZeroU32::new(5).unwrap()));
        NhlApiClient {
            config,
            rate_limiter,
        }
    }

    fn wait_for_slot(&self) {
        thread::sleep(COURTESY_DELAY);
        while self.rate_limiter.check().is_err() {
            thread::sleep(Duration::from_millis(50));
        }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        self.wait_for_slot();

        let mut retry_count = 0;

        loop {
            debug!(url, attempt = retry_count + 1, "GET");
            let response = ureq::get(url)
                .set("User-Agent", "nhl_predict/0.1.0")
                .call();

            match response {
                Ok(resp) => {
                    return resp.into_string().map_err(|e| {
                        AppError::HttpError(e.to_string())
                    });
                }
                Err(ureq::Error::Status(429, _)) => {
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::RateLimited);
                    }
                    let wait_ms = 2000 * (retry_count + 1) as u64;
                    warn!(wait_ms, "rate limited by stats API, backing off");
                    thread::sleep(Duration::from_millis(wait_ms));
                    retry_count += 1;
                }
                Err(e) => {
                    return Err(AppError::HttpError(e.to_string()));
                }
            }
        }
    }

    /// League table for the configured season, in points order.
    pub fn get_team_stats(&self) -> Result<Vec<TeamStats>, AppError> {
        let url = team_summary_url(&self.config.base_url, &self.config.season);

        let body = self.execute_request(&url)?;
        let teams = parse_team_summaries(&body, &self.config.season)?;

        info!(season = %self.config.season, teams = teams.len(), "fetched team stats");
        Ok(teams)
    }
}

pub fn parse_team_summaries(body: &str, season: &str) -> Result<Vec<TeamStats>, AppError> {
    let response: TeamSummaryResponse = serde_json::from_str(body).map_err(|e| {
        AppError::JsonError(e.to_string())
    })?;

    debug!(total = response.total, "team summary rows");
    if response.data.is_empty() {
        return Err(AppError::NoTeamData(season.to_string()));
    }

    Ok(response.data.iter().map(TeamStats::from_summary).collect())
}
