pub mod predictor;
pub mod team_stats;
