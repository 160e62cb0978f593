use crate::analysis::predictor::{PredictionResult, ScoreBreakdown};
use crate::analysis::team_stats::TeamStats;
use crate::error::AppError;
use chrono::NaiveDate;
use colored::*;
use std::io::{self, BufRead, Write};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct FactorRow {
    factor: String,
    weight: String,
    home: String,
    away: String,
}

pub fn display_prediction(
    home: &TeamStats,
    away: &TeamStats,
    date: NaiveDate,
    prediction: &PredictionResult,
) {
    println!(
        "\n{}",
        format!("🏒 Prediction for {} vs {} on {}", home.name, away.name, date)
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    let (home_line, away_line) = (
        format!("{} win probability: {}", home.name, format_pct(prediction.home_win_probability)),
        format!("{} win probability: {}", away.name, format_pct(prediction.away_win_probability)),
    );

    if prediction.home_win_probability >= prediction.away_win_probability {
        println!("{}", home_line.green().bold());
        println!("{}", away_line);
    } else {
        println!("{}", home_line);
        println!("{}", away_line.green().bold());
    }
    println!();
}

pub fn display_breakdown(home: &ScoreBreakdown, away: &ScoreBreakdown) {
    println!("{}", "Score Breakdown".bold().yellow());

    let w = &home.weights;
    let rows = vec![
        factor_row("Points %", w.points_pct, home.point_factor, away.point_factor),
        factor_row("Goal diff/game", w.goal_diff, home.goal_diff_factor, away.goal_diff_factor),
        factor_row("Power play", w.power_play, home.power_play_factor, away.power_play_factor),
        factor_row("Penalty kill", w.penalty_kill, home.penalty_kill_factor, away.penalty_kill_factor),
        FactorRow {
            factor: "Composite".bold().to_string(),
            weight: format!("{:.3}", w.sum()),
            home: format!("{:.3}", home.total()),
            away: format!("{:.3}", away.total()),
        },
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    println!("• Factors are normalized to 0-1 before weighting (composite excludes noise)\n");
}

fn factor_row(name: &str, weight: f64, home: f64, away: f64) -> FactorRow {
    FactorRow {
        factor: name.to_string(),
        weight: format!("{:.3}", weight),
        home: format!("{:.3}", home),
        away: format!("{:.3}", away),
    }
}

pub fn display_team_stats(team: &TeamStats) {
    for line in team_stat_lines(team) {
        println!("{}", line);
    }
}

fn team_stat_lines(team: &TeamStats) -> Vec<String> {
    vec![
        format!("\n{}:", team.name.bold()),
        format!("Record: {}-{}-{}", team.wins, team.losses, team.ot_losses),
        format!("Win Percentage: {}", format_pct(team.win_pct() / 100.0)),
        format!(
            "Points: {} ({} of possible)",
            team.points,
            format_pct(team.points_pct() / 100.0)
        ),
        format!("Goals For/Game: {:.2}", team.goals_for_per_game()),
        format!("Goals Against/Game: {:.2}", team.goals_against_per_game()),
        format!("Power Play: {:.1}%", team.power_play_pct),
        format!("Penalty Kill: {:.1}%", team.penalty_kill_pct),
        format!("Save Percentage: {:.3}", team.save_pct),
    ]
}

fn format_pct(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

pub fn prompt(label: &str) -> Result<String, AppError> {
    print!("{}", label);
    io::stdout()
        .flush()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    Ok(line.trim().to_string())
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
