use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::stats_source::{ScoreboardGame, ScoreboardTeam};

#[derive(Debug, Deserialize)]
pub struct ScoreMatchesQuery {
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamScore {
    pub score: Option<u32>,
    pub name: String,
    pub abbrev: String,
    pub logo: Option<String>,
}

impl From<ScoreboardTeam> for TeamScore {
    fn from(team: ScoreboardTeam) -> Self {
        Self {
            score: team.score,
            name: team.name.default,
            abbrev: team.abbrev,
            logo: team.logo,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTeams {
    pub home_team: TeamScore,
    pub away_team: TeamScore,
}

/// Score board entry as served to the front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub game_date: String,
    pub game_id: i64,
    /// Kick-off as `HH:MM` in the display zone, empty when upstream time is unreadable.
    pub game_time: String,
    pub game_state: String,
    pub teams: MatchTeams,
}

impl MatchSummary {
    pub fn from_scoreboard(game: ScoreboardGame, display_zone: &Tz) -> Self {
        let game_time = DateTime::parse_from_rfc3339(&game.start_time_utc)
            .map(|start| start.with_timezone(display_zone).format("%H:%M").to_string())
            .unwrap_or_default();

        Self {
            game_date: game.game_date,
            game_id: game.id,
            game_time,
            game_state: game.game_state,
            teams: MatchTeams {
                home_team: game.home_team.into(),
                away_team: game.away_team.into(),
            },
        }
    }
}
