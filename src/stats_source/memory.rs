use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use tracing::debug;

use super::nhl::take_field;
use super::{
    GameLogEntry, MilestoneKind, ScoreboardGame, Season, SkaterSummary, StatsSource,
    StatsSourceError, TeamSummary,
};

#[derive(Debug, Default)]
struct Store {
    skaters: Vec<SkaterSummary>,
    game_logs: HashMap<i64, Vec<GameLogEntry>>,
    failing_players: HashSet<i64>,
    documents: HashMap<String, Value>,
    scores: HashMap<NaiveDate, Vec<ScoreboardGame>>,
    teams: Vec<TeamSummary>,
}

/// In-memory implementation of [`StatsSource`] for development and testing.
///
/// Seasons are not tracked: every season sees the same data. Anything not
/// seeded answers like an upstream 404.
#[derive(Debug, Default)]
pub struct InMemoryStatsSource {
    store: RwLock<Store>,
    game_log_requests: AtomicUsize,
}

impl InMemoryStatsSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skaters(self, skaters: Vec<SkaterSummary>) -> Self {
        self.write().skaters = skaters;
        self
    }

    pub fn with_game_log(self, player_id: i64, entries: Vec<GameLogEntry>) -> Self {
        self.write().game_logs.insert(player_id, entries);
        self
    }

    /// Makes every game log request for `player_id` fail with a 503.
    pub fn with_failing_player(self, player_id: i64) -> Self {
        self.write().failing_players.insert(player_id);
        self
    }

    pub fn with_scores(self, date: NaiveDate, games: Vec<ScoreboardGame>) -> Self {
        self.write().scores.insert(date, games);
        self
    }

    pub fn with_teams(self, teams: Vec<TeamSummary>) -> Self {
        self.write().teams = teams;
        self
    }

    /// Seeds a whole upstream document under its resource path, e.g.
    /// `gamecenter/2023020204/landing`, `gamecenter/2023020204/play-by-play`,
    /// `schedule/2023-11-09`, `player/8478402/landing`, `milestones/skaters`.
    /// Rosters and week schedules are extracted from it like the HTTP client does.
    pub fn with_document(self, path: impl Into<String>, document: Value) -> Self {
        self.write().documents.insert(path.into(), document);
        self
    }

    /// Number of game log requests served so far, failed ones included.
    pub fn game_log_requests(&self) -> usize {
        self.game_log_requests.load(Ordering::SeqCst)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Store> {
        self.store.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Store> {
        self.store.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn not_found(path: &str) -> StatsSourceError {
        StatsSourceError::Status {
            status: 404,
            url: format!("memory://{path}"),
        }
    }

    fn document(&self, path: &str) -> Result<Value, StatsSourceError> {
        debug!(path = %path, "Serving document from memory");
        self.read()
            .documents
            .get(path)
            .cloned()
            .ok_or_else(|| Self::not_found(path))
    }

    fn game_log(&self, player_id: i64) -> Result<Vec<GameLogEntry>, StatsSourceError> {
        self.game_log_requests.fetch_add(1, Ordering::SeqCst);

        let store = self.read();
        if store.failing_players.contains(&player_id) {
            return Err(StatsSourceError::Status {
                status: 503,
                url: format!("memory://player/{player_id}/game-log"),
            });
        }

        store
            .game_logs
            .get(&player_id)
            .cloned()
            .ok_or_else(|| Self::not_found(&format!("player/{player_id}/game-log")))
    }
}

#[async_trait]
impl StatsSource for InMemoryStatsSource {
    async fn skater_summaries(
        &self,
        _season: Season,
        limit: usize,
    ) -> Result<Vec<SkaterSummary>, StatsSourceError> {
        Ok(self.read().skaters.iter().take(limit).cloned().collect())
    }

    async fn player_game_log(
        &self,
        player_id: i64,
        _season: Season,
    ) -> Result<Vec<GameLogEntry>, StatsSourceError> {
        self.game_log(player_id)
    }

    async fn player_game_log_raw(
        &self,
        player_id: i64,
        season: Season,
    ) -> Result<Value, StatsSourceError> {
        let entries = self.game_log(player_id)?;
        Ok(serde_json::json!({
            "seasonId": season.to_string(),
            "gameTypeId": 2,
            "gameLog": entries,
        }))
    }

    async fn player_landing(&self, player_id: i64) -> Result<Value, StatsSourceError> {
        self.document(&format!("player/{player_id}/landing"))
    }

    async fn game_landing(&self, game_id: i64) -> Result<Value, StatsSourceError> {
        self.document(&format!("gamecenter/{game_id}/landing"))
    }

    async fn game_rosters(&self, game_id: i64) -> Result<Value, StatsSourceError> {
        let document = self.document(&format!("gamecenter/{game_id}/play-by-play"))?;
        Ok(take_field(document, "rosterSpots"))
    }

    async fn week_schedule(&self, date: NaiveDate) -> Result<Value, StatsSourceError> {
        let document = self.document(&format!("schedule/{}", date.format("%Y-%m-%d")))?;
        Ok(take_field(document, "gameWeek"))
    }

    async fn scores(&self, date: NaiveDate) -> Result<Vec<ScoreboardGame>, StatsSourceError> {
        Ok(self.read().scores.get(&date).cloned().unwrap_or_default())
    }

    async fn milestones(&self, kind: MilestoneKind) -> Result<Value, StatsSourceError> {
        self.document(&format!("milestones/{kind}"))
    }

    async fn team_summaries(&self, _season: Season) -> Result<Vec<TeamSummary>, StatsSourceError> {
        Ok(self.read().teams.clone())
    }
}
