use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::{
    GameLogEntry, MilestoneKind, ScoreboardGame, Season, SkaterSummary, StatsSource,
    StatsSourceError, TeamSummary,
};

const REGULAR_SEASON: u8 = 2;
const TEAM_SUMMARY_LIMIT: usize = 50;

/// Where the NHL web and stats APIs live.
#[derive(Debug, Clone)]
pub struct NhlApiConfig {
    pub web_base_url: String,
    pub stats_base_url: String,
    pub timeout: Duration,
}

impl Default for NhlApiConfig {
    fn default() -> Self {
        Self {
            web_base_url: "https://api-web.nhle.com".to_string(),
            stats_base_url: "https://api.nhle.com/stats/rest/en".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameLogEnvelope {
    #[serde(default)]
    game_log: Vec<GameLogEntry>,
}

#[derive(Debug, Deserialize)]
struct ScoreEnvelope {
    #[serde(default)]
    games: Vec<ScoreboardGame>,
}

/// [`StatsSource`] backed by the public NHL APIs.
pub struct NhlStatsClient {
    http: reqwest::Client,
    config: NhlApiConfig,
}

impl NhlStatsClient {
    pub fn new(config: NhlApiConfig) -> Result<Self, StatsSourceError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("puckstats/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| StatsSourceError::Client(e.to_string()))?;

        Ok(Self { http, config })
    }

    fn web_url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.config.web_base_url.trim_end_matches('/'), path)
    }

    fn stats_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.stats_base_url.trim_end_matches('/'), path)
    }

    #[instrument(skip(self, query))]
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, StatsSourceError> {
        debug!("Requesting upstream stats");

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Upstream request failed");
                StatsSourceError::Transport {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Upstream returned error status");
            return Err(StatsSourceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.json::<T>().await.map_err(|e| {
            warn!(error = %e, "Failed to decode upstream response");
            StatsSourceError::Decode {
                url: url.to_string(),
                message: e.to_string(),
            }
        })
    }

    fn game_log_path(player_id: i64, season: Season) -> String {
        format!("player/{player_id}/game-log/{season}/{REGULAR_SEASON}")
    }
}

/// Moves `field` out of an upstream document, `null` when absent.
pub(super) fn take_field(mut document: Value, field: &str) -> Value {
    document
        .get_mut(field)
        .map(Value::take)
        .unwrap_or(Value::Null)
}

#[async_trait]
impl StatsSource for NhlStatsClient {
    async fn skater_summaries(
        &self,
        season: Season,
        limit: usize,
    ) -> Result<Vec<SkaterSummary>, StatsSourceError> {
        let url = self.stats_url("skater/summary");
        let query = [
            ("sort", r#"[{"property":"goals","direction":"DESC"}]"#.to_string()),
            ("start", "0".to_string()),
            ("limit", limit.to_string()),
            (
                "cayenneExp",
                format!("seasonId={season} and gameTypeId={REGULAR_SEASON}"),
            ),
        ];

        let envelope: DataEnvelope<SkaterSummary> = self.get_json(&url, &query).await?;
        debug!(season = %season, count = envelope.data.len(), "Fetched skater summaries");
        Ok(envelope.data)
    }

    async fn player_game_log(
        &self,
        player_id: i64,
        season: Season,
    ) -> Result<Vec<GameLogEntry>, StatsSourceError> {
        let url = self.web_url(&Self::game_log_path(player_id, season));
        let envelope: GameLogEnvelope = self.get_json(&url, &[]).await?;
        Ok(envelope.game_log)
    }

    async fn player_game_log_raw(
        &self,
        player_id: i64,
        season: Season,
    ) -> Result<Value, StatsSourceError> {
        let url = self.web_url(&Self::game_log_path(player_id, season));
        self.get_json(&url, &[]).await
    }

    async fn player_landing(&self, player_id: i64) -> Result<Value, StatsSourceError> {
        let url = self.web_url(&format!("player/{player_id}/landing"));
        self.get_json(&url, &[]).await
    }

    async fn game_landing(&self, game_id: i64) -> Result<Value, StatsSourceError> {
        let url = self.web_url(&format!("gamecenter/{game_id}/landing"));
        self.get_json(&url, &[]).await
    }

    async fn game_rosters(&self, game_id: i64) -> Result<Value, StatsSourceError> {
        let url = self.web_url(&format!("gamecenter/{game_id}/play-by-play"));
        let document: Value = self.get_json(&url, &[]).await?;
        Ok(take_field(document, "rosterSpots"))
    }

    async fn week_schedule(&self, date: NaiveDate) -> Result<Value, StatsSourceError> {
        let url = self.web_url(&format!("schedule/{}", date.format("%Y-%m-%d")));
        let document: Value = self.get_json(&url, &[]).await?;
        Ok(take_field(document, "gameWeek"))
    }

    async fn scores(&self, date: NaiveDate) -> Result<Vec<ScoreboardGame>, StatsSourceError> {
        let url = self.web_url(&format!("score/{}", date.format("%Y-%m-%d")));
        let envelope: ScoreEnvelope = self.get_json(&url, &[]).await?;
        Ok(envelope.games)
    }

    async fn milestones(&self, kind: MilestoneKind) -> Result<Value, StatsSourceError> {
        let url = self.stats_url(&format!("milestones/{kind}"));
        self.get_json(&url, &[]).await
    }

    async fn team_summaries(&self, season: Season) -> Result<Vec<TeamSummary>, StatsSourceError> {
        let url = self.stats_url("team/summary");
        let query = [
            ("isAggregate", "false".to_string()),
            ("isGame", "false".to_string()),
            (
                "sort",
                concat!(
                    r#"[{"property":"points","direction":"DESC"},"#,
                    r#"{"property":"wins","direction":"DESC"},"#,
                    r#"{"property":"teamId","direction":"ASC"}]"#
                )
                .to_string(),
            ),
            ("start", "0".to_string()),
            ("limit", TEAM_SUMMARY_LIMIT.to_string()),
            (
                "cayenneExp",
                format!(
                    "gameTypeId={REGULAR_SEASON} and seasonId<={season} and seasonId>={season}"
                ),
            ),
        ];

        let envelope: DataEnvelope<TeamSummary> = self.get_json(&url, &query).await?;
        Ok(envelope.data)
    }
}
