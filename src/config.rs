use crate::analysis::predictor::{ModelParams, WeightConfig};
use crate::api::endpoints::DEFAULT_BASE_URL;
use crate::error::AppError;
use std::env;
use tracing::{debug, warn};

pub const DEFAULT_SEASON: &str = "20242025";

#[derive(Debug, Clone)]
pub struct Config {
    pub season: String,
    pub base_url: String,
    pub weights: WeightConfig,
    pub params: ModelParams,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let season = lookup("NHL_SEASON").unwrap_or_else(|| DEFAULT_SEASON.to_string());
        if season.len() != 8 || !season.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::ConfigError(format!(
                "NHL_SEASON must look like 20242025, got '{}'",
                season
            )));
        }

        let base_url = lookup("NHL_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let defaults = WeightConfig::default();
        let weights = WeightConfig::new(
            read_f64(&lookup, "NHL_WEIGHT_POINTS_PCT", defaults.points_pct)?,
            read_f64(&lookup, "NHL_WEIGHT_GOAL_DIFF", defaults.goal_diff)?,
            read_f64(&lookup, "NHL_WEIGHT_POWER_PLAY", defaults.power_play)?,
            read_f64(&lookup, "NHL_WEIGHT_PENALTY_KILL", defaults.penalty_kill)?,
        )
        .map_err(|e| AppError::ConfigError(e.to_string()))?;

        // Weights are deliberately not renormalized
        if (weights.sum() - 1.0).abs() > 1e-6 {
            warn!(sum = weights.sum(), "prediction weights do not sum to 1.0");
        }

        let mut params = ModelParams::default();
        params.noise_std_dev = read_f64(&lookup, "NHL_NOISE_STD_DEV", params.noise_std_dev)?;
        params
            .validate()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        debug!(%season, %base_url, ?weights, "loaded configuration");

        Ok(Config {
            season,
            base_url,
            weights,
            params,
        })
    }
}

fn read_f64(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: f64,
) -> Result<f64, AppError> {
    match lookup(key) {
        Some(raw) => raw.trim().parse::<f64>().map_err(|_| {
            AppError::ConfigError(format!("{} is not a number: '{}'", key, raw))
        }),
        None => Ok(default),
    }
}
