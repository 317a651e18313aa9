use serde::{Deserialize, Serialize};

use crate::performance::{GameRecord, PlayerRecord};
use crate::stats_source::SkaterSummary;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPlayersQuery {
    pub season_id: Option<String>,
}

/// A scored skater as returned by `GET /top-players`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPlayer {
    pub player_id: i64,
    pub skater_full_name: String,
    pub team_abbrevs: Option<String>,
    pub position_code: Option<String>,
    pub goals: u32,
    pub points: u32,
    pub shots: u32,
    pub score: f64,
    pub recent_games: Vec<GameRecord>,
}

impl RankedPlayer {
    pub fn new(summary: &SkaterSummary, record: PlayerRecord) -> Self {
        Self {
            player_id: summary.player_id,
            skater_full_name: summary.skater_full_name.clone(),
            team_abbrevs: summary.team_abbrevs.clone(),
            position_code: summary.position_code.clone(),
            goals: summary.goals,
            points: summary.points,
            shots: summary.shots,
            score: record.score.unwrap_or_default(),
            recent_games: record.recent_games,
        }
    }
}
