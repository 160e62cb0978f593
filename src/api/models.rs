use serde::Deserialize;

// Stats REST team summary response
#[derive(Debug, Deserialize)]
pub struct TeamSummaryResponse {
    #[serde(default)]
    pub data: Vec<TeamSummaryDto>,
    #[serde(default)]
    pub total: i64,
}

// Rates come back as fractions (0.243), per-game values as plain averages.
// Missing or null rates are read as zero.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummaryDto {
    pub team_id: i64,
    pub team_full_name: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    #[serde(default)]
    pub ot_losses: Option<u32>,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    #[serde(default)]
    pub power_play_pct: Option<f64>,
    #[serde(default)]
    pub penalty_kill_pct: Option<f64>,
    #[serde(default)]
    pub shots_against_per_game: Option<f64>,
    #[serde(default)]
    pub goals_against_per_game: Option<f64>,
}
