use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One player's counting stats for a single game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    #[serde(default)]
    pub shots: u32,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub power_play_goals: Option<u32>,
    /// Raw `"M:SS"` text as reported upstream.
    #[serde(default, alias = "toi")]
    pub time_on_ice: Option<String>,
}

impl GameRecord {
    pub fn new(shots: u32, goals: u32) -> Self {
        Self {
            shots,
            goals,
            ..Self::default()
        }
    }

    pub fn with_power_play_goals(mut self, power_play_goals: u32) -> Self {
        self.power_play_goals = Some(power_play_goals);
        self
    }

    pub fn with_time_on_ice(mut self, time_on_ice: impl Into<String>) -> Self {
        self.time_on_ice = Some(time_on_ice.into());
        self
    }

    pub fn power_play_goals(&self) -> u32 {
        self.power_play_goals.unwrap_or_default()
    }

    /// Time on ice in seconds; missing or malformed values count as zero.
    pub fn time_on_ice_seconds(&self) -> u32 {
        self.time_on_ice
            .as_deref()
            .and_then(|raw| raw.parse::<TimeOnIce>().ok())
            .map(|toi| toi.seconds())
            .unwrap_or_default()
    }
}

/// A player and their windowed game log. `score` is written by the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub player_id: String,
    pub recent_games: Vec<GameRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl PlayerRecord {
    pub fn new(player_id: impl Into<String>, recent_games: Vec<GameRecord>) -> Self {
        Self {
            player_id: player_id.into(),
            recent_games,
            score: None,
        }
    }

    /// At least one game in the window has a shot on goal.
    pub fn is_eligible(&self) -> bool {
        self.recent_games.iter().any(|game| game.shots > 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("missing ':' separator in {0:?}")]
    MissingSeparator(String),

    #[error("invalid minutes in {0:?}")]
    InvalidMinutes(String),

    #[error("invalid seconds in {0:?}")]
    InvalidSeconds(String),
}

/// Parsed `"M:SS"` duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeOnIce {
    seconds: u32,
}

impl TimeOnIce {
    pub fn from_seconds(seconds: u32) -> Self {
        Self { seconds }
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }
}

impl FromStr for TimeOnIce {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (minutes, seconds) = trimmed
            .split_once(':')
            .ok_or_else(|| DurationError::MissingSeparator(s.to_string()))?;

        let minutes: u32 = minutes
            .parse()
            .map_err(|_| DurationError::InvalidMinutes(s.to_string()))?;
        let seconds: u32 = seconds
            .parse()
            .map_err(|_| DurationError::InvalidSeconds(s.to_string()))?;

        minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .map(Self::from_seconds)
            .ok_or_else(|| DurationError::InvalidMinutes(s.to_string()))
    }
}
