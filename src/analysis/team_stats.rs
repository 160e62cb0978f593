use crate::analysis::predictor::{RecordError, TeamPerformanceRecord};
use crate::api::models::TeamSummaryDto;

/// Season aggregates for one team, rates already scaled to 0–100.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamStats {
    pub team_id: i64,
    pub name: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub ot_losses: u32,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub power_play_pct: f64,
    pub penalty_kill_pct: f64,
    pub save_pct: f64,
}

impl TeamStats {
    pub fn from_summary(dto: &TeamSummaryDto) -> Self {
        let shots_against_per_game = dto.shots_against_per_game.unwrap_or(0.0);
        let goals_against_per_game = dto.goals_against_per_game.unwrap_or(0.0);

        let save_pct = if shots_against_per_game > 0.0 {
            (shots_against_per_game - goals_against_per_game) / shots_against_per_game
        } else {
            0.0
        };

        TeamStats {
            team_id: dto.team_id,
            name: dto.team_full_name.clone(),
            games_played: dto.games_played,
            wins: dto.wins,
            losses: dto.losses,
            ot_losses: dto.ot_losses.unwrap_or(0),
            points: dto.points,
            goals_for: dto.goals_for,
            goals_against: dto.goals_against,
            power_play_pct: dto.power_play_pct.unwrap_or(0.0) * 100.0,
            penalty_kill_pct: dto.penalty_kill_pct.unwrap_or(0.0) * 100.0,
            save_pct,
        }
    }

    fn per_game(&self, total: f64) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            total / self.games_played as f64
        }
    }

    pub fn win_pct(&self) -> f64 {
        self.per_game(self.wins as f64) * 100.0
    }

    pub fn points_pct(&self) -> f64 {
        self.per_game(self.points as f64) / 2.0 * 100.0
    }

    pub fn goals_for_per_game(&self) -> f64 {
        self.per_game(self.goals_for as f64)
    }

    pub fn goals_against_per_game(&self) -> f64 {
        self.per_game(self.goals_against as f64)
    }

    pub fn goal_differential_per_game(&self) -> f64 {
        self.per_game(self.goals_for as f64 - self.goals_against as f64)
    }

    /// Scoring input for this team. A team without games has no rates.
    pub fn performance(&self) -> Result<TeamPerformanceRecord, RecordError> {
        let record = TeamPerformanceRecord {
            games_played: self.games_played,
            points_pct: self.points_pct(),
            goal_differential_per_game: self.goal_differential_per_game(),
            power_play_pct: self.power_play_pct,
            penalty_kill_pct: self.penalty_kill_pct,
        };
        record.validate()?;

        Ok(record)
    }
}

/// League table keyed by display name, in the order the provider returned it.
pub struct TeamDirectory {
    teams: Vec<TeamStats>,
}

impl TeamDirectory {
    pub fn new(teams: Vec<TeamStats>) -> Self {
        TeamDirectory { teams }
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// First team whose full name contains `query`, ignoring case.
    pub fn find(&self, query: &str) -> Option<&TeamStats> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        self.teams
            .iter()
            .find(|t| t.name.to_lowercase().contains(&needle))
    }
}
