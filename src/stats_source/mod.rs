mod errors;
pub mod memory;
pub mod nhl;
pub mod types;

pub use errors::StatsSourceError;
pub use memory::InMemoryStatsSource;
pub use nhl::{NhlApiConfig, NhlStatsClient};
pub use types::{
    GameLogEntry, LocalizedName, ScoreboardGame, ScoreboardTeam, Season, SkaterSummary,
    TeamSummary,
};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MilestoneKind {
    Skaters,
    Goalies,
}

/// Upstream provider of schedules, scores, rosters and player/team stats.
///
/// Typed methods return what the crate itself computes on; the rest hand
/// upstream JSON back untouched for the front-end.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// League skater summaries for the regular season, sorted by goals.
    async fn skater_summaries(
        &self,
        season: Season,
        limit: usize,
    ) -> Result<Vec<SkaterSummary>, StatsSourceError>;

    /// Regular season game log of one player, in upstream order.
    async fn player_game_log(
        &self,
        player_id: i64,
        season: Season,
    ) -> Result<Vec<GameLogEntry>, StatsSourceError>;

    async fn player_game_log_raw(
        &self,
        player_id: i64,
        season: Season,
    ) -> Result<Value, StatsSourceError>;

    async fn player_landing(&self, player_id: i64) -> Result<Value, StatsSourceError>;

    async fn game_landing(&self, game_id: i64) -> Result<Value, StatsSourceError>;

    /// Roster spots of both teams for a game.
    async fn game_rosters(&self, game_id: i64) -> Result<Value, StatsSourceError>;

    /// Games of the week starting at `date`.
    async fn week_schedule(&self, date: NaiveDate) -> Result<Value, StatsSourceError>;

    async fn scores(&self, date: NaiveDate) -> Result<Vec<ScoreboardGame>, StatsSourceError>;

    async fn milestones(&self, kind: MilestoneKind) -> Result<Value, StatsSourceError>;

    async fn team_summaries(&self, season: Season) -> Result<Vec<TeamSummary>, StatsSourceError>;
}
