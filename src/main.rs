mod analysis;
mod api;
mod config;
mod display;
mod error;

use analysis::predictor::{GaussianNoise, NoNoise, RandomSource, ScoringEngine};
use analysis::team_stats::{TeamDirectory, TeamStats};
use api::client::NhlApiClient;
use chrono::NaiveDate;
use clap::Parser;
use config::Config;
use display::output::{
    display_breakdown, display_error, display_info, display_prediction, display_success,
    display_team_stats, prompt,
};
use error::AppError;
use indicatif::ProgressBar;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "NHL Predict")]
#[command(about = "Estimate the win probability of an NHL matchup from season stats", long_about = None)]
struct Args {
    /// Home team name (any part of it, e.g. "leafs"); prompted when omitted
    home: Option<String>,

    /// Away team name; prompted when omitted
    away: Option<String>,

    /// Game date (YYYY-MM-DD, default: today)
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Season id, e.g. 20242025 (default: NHL_SEASON or 20242025)
    #[arg(short, long)]
    season: Option<String>,

    /// Seed the noise source for a reproducible prediction
    #[arg(long, conflicts_with = "no_noise")]
    seed: Option<u64>,

    /// Disable the random perturbation entirely
    #[arg(long)]
    no_noise: bool,

    /// Skip the per-team stat sheets
    #[arg(long)]
    no_stats: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut config = Config::from_env()?;
    if let Some(season) = args.season {
        config.season = season;
    }

    let prompted = args.home.is_none() || args.away.is_none();
    if prompted {
        println!("\nEnter game details:");
    }

    let date = match args.date {
        Some(date) => date,
        None if prompted => read_date()?,
        None => chrono::Local::now().date_naive(),
    };
    let home_query = match args.home {
        Some(name) => name,
        None => prompt("Enter home team name: ")?,
    };
    let away_query = match args.away {
        Some(name) => name,
        None => prompt("Enter away team name: ")?,
    };

    let engine = ScoringEngine::new(config.weights, config.params)?;
    let mut noise: Box<dyn RandomSource> = match (args.no_noise, args.seed) {
        (true, _) => Box::new(NoNoise),
        (false, Some(seed)) => Box::new(GaussianNoise::seeded(seed)),
        (false, None) => Box::new(GaussianNoise::new()),
    };

    display_info(&format!("Fetching team stats for season {}", config.season));
    let client = NhlApiClient::new(config.clone());

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Fetching league table");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let teams = client.get_team_stats();
    spinner.finish_and_clear();

    let directory = TeamDirectory::new(teams?);
    display_success(&format!("Loaded {} teams", directory.len()));

    let home = find_team(&directory, &home_query)?;
    let away = find_team(&directory, &away_query)?;
    info!(
        home = %home.name,
        home_id = home.team_id,
        away = %away.name,
        away_id = away.team_id,
        %date,
        "predicting matchup"
    );

    let home_record = home.performance()?;
    let away_record = away.performance()?;
    debug!(?home_record, ?away_record, "performance records");

    let prediction = engine.predict(&home_record, &away_record, noise.as_mut())?;

    display_prediction(home, away, date, &prediction);
    display_breakdown(
        &engine.breakdown(&home_record)?,
        &engine.breakdown(&away_record)?,
    );

    if !args.no_stats {
        println!("Team Statistics:");
        display_team_stats(home);
        display_team_stats(away);
        println!();
    }

    Ok(())
}

fn find_team<'a>(directory: &'a TeamDirectory, query: &str) -> Result<&'a TeamStats, AppError> {
    directory
        .find(query)
        .ok_or_else(|| AppError::TeamNotFound(query.to_string()))
}

fn read_date() -> Result<NaiveDate, AppError> {
    let raw = prompt("Enter date (YYYY-MM-DD): ")?;
    if raw.is_empty() {
        return Ok(chrono::Local::now().date_naive());
    }

    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidInput(format!("'{}' is not a YYYY-MM-DD date", raw)))
}
