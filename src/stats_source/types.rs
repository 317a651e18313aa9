use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::performance::GameRecord;

/// An NHL season identifier such as `20232024`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Season(u32);

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("season must be eight digits like 20232024, got {s:?}"));
        }

        let id: u32 = s.parse().map_err(|_| format!("invalid season {s:?}"))?;
        let (start, end) = (id / 10_000, id % 10_000);
        if end != start + 1 {
            return Err(format!("season {s:?} must span consecutive years"));
        }
        Ok(Self(id))
    }
}

impl TryFrom<String> for Season {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Season> for String {
    fn from(season: Season) -> Self {
        season.to_string()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Row of the league-wide skater summary report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkaterSummary {
    pub player_id: i64,
    pub skater_full_name: String,
    #[serde(default)]
    pub team_abbrevs: Option<String>,
    #[serde(default)]
    pub position_code: Option<String>,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub shots: u32,
}

/// One entry of a skater's game log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLogEntry {
    pub game_id: i64,
    #[serde(default)]
    pub game_date: Option<String>,
    #[serde(default)]
    pub opponent_abbrev: Option<String>,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub shots: u32,
    #[serde(default)]
    pub power_play_goals: Option<u32>,
    #[serde(default)]
    pub toi: Option<String>,
}

impl From<&GameLogEntry> for GameRecord {
    fn from(entry: &GameLogEntry) -> Self {
        GameRecord {
            shots: entry.shots,
            goals: entry.goals,
            power_play_goals: entry.power_play_goals,
            time_on_ice: entry.toi.clone(),
        }
    }
}

/// Row of the team summary report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub team_full_name: String,
    #[serde(default)]
    pub goals_for: u32,
    #[serde(default)]
    pub goals_for_per_game: f64,
    #[serde(default)]
    pub goals_against: u32,
    #[serde(default)]
    pub goals_against_per_game: f64,
    #[serde(default)]
    pub shots_for_per_game: f64,
    #[serde(default)]
    pub shots_against_per_game: f64,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub wins_in_regulation: u32,
    #[serde(default)]
    pub wins_in_shootout: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ot_losses: u32,
    #[serde(default)]
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedName {
    pub default: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreboardTeam {
    #[serde(default)]
    pub score: Option<u32>,
    pub name: LocalizedName,
    pub abbrev: String,
    #[serde(default)]
    pub logo: Option<String>,
}

/// A game as listed on the daily score board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardGame {
    pub id: i64,
    pub game_date: String,
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: String,
    pub game_state: String,
    pub home_team: ScoreboardTeam,
    pub away_team: ScoreboardTeam,
}
