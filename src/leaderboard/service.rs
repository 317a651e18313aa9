use futures::stream::{self, StreamExt, TryStreamExt};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{types::RankedPlayer, LeaderboardConfig};
use crate::performance::{GameRecord, PerformanceScorer, PlayerRecord};
use crate::shared::AppError;
use crate::stats_source::{GameLogEntry, Season, SkaterSummary, StatsSource, StatsSourceError};

/// Most recent `window` games of a log, oldest first, as scorer input.
///
/// Upstream order is not trusted: entries are ordered by game date, then by
/// game id. Undated entries sort before dated ones.
pub fn recent_window(log: &[GameLogEntry], window: usize) -> Vec<GameRecord> {
    let mut ordered: Vec<&GameLogEntry> = log.iter().collect();
    ordered.sort_by(|a, b| {
        (a.game_date.as_deref(), a.game_id).cmp(&(b.game_date.as_deref(), b.game_id))
    });

    let start = ordered.len().saturating_sub(window);
    ordered[start..].iter().copied().map(GameRecord::from).collect()
}

/// Builds the season's top players from league summaries and game logs.
pub struct TopPlayersService {
    stats_source: Arc<dyn StatsSource>,
    scorer: PerformanceScorer,
    config: LeaderboardConfig,
}

impl TopPlayersService {
    pub fn new(stats_source: Arc<dyn StatsSource>, config: LeaderboardConfig) -> Self {
        Self {
            stats_source,
            scorer: PerformanceScorer::new(),
            config,
        }
    }

    /// Ranks the season's leading goal scorers by recent performance.
    ///
    /// Any failed upstream request fails the whole computation.
    #[instrument(skip(self))]
    pub async fn top_players(&self, season: Season) -> Result<Vec<RankedPlayer>, AppError> {
        let summaries = self
            .stats_source
            .skater_summaries(season, self.config.summary_limit)
            .await?;
        info!(skater_count = summaries.len(), "Fetched skater summaries");

        let records = self
            .attach_recent_games(&summaries, season)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to fetch a skater game log");
                AppError::from(e)
            })?;

        let ranked = self.scorer.rank(records, self.config.top_n);

        let by_id: HashMap<String, &SkaterSummary> = summaries
            .iter()
            .map(|summary| (summary.player_id.to_string(), summary))
            .collect();

        let players: Vec<RankedPlayer> = ranked
            .into_iter()
            .filter_map(|record| {
                let summary = by_id.get(&record.player_id)?;
                Some(RankedPlayer::new(summary, record))
            })
            .collect();

        info!(ranked_count = players.len(), "Ranked top players");
        Ok(players)
    }

    /// Fetches every game log with bounded concurrency, keeping summary order.
    async fn attach_recent_games(
        &self,
        summaries: &[SkaterSummary],
        season: Season,
    ) -> Result<Vec<PlayerRecord>, StatsSourceError> {
        let source = &self.stats_source;
        let window = self.config.game_window;

        let player_ids: Vec<_> = summaries.iter().map(|summary| summary.player_id).collect();

        stream::iter(player_ids)
            .map(|player_id| async move {
                let log = source.player_game_log(player_id, season).await?;
                Ok::<_, StatsSourceError>(PlayerRecord::new(
                    player_id.to_string(),
                    recent_window(&log, window),
                ))
            })
            .buffered(self.config.concurrency.max(1))
            .try_collect()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats_source::InMemoryStatsSource;

    fn entry(game_id: i64, shots: u32, goals: u32, toi: &str) -> GameLogEntry {
        GameLogEntry {
            game_id,
            game_date: None,
            opponent_abbrev: None,
            goals,
            assists: 0,
            shots,
            power_play_goals: None,
            toi: Some(toi.to_string()),
        }
    }

    fn skater(player_id: i64, name: &str) -> SkaterSummary {
        SkaterSummary {
            player_id,
            skater_full_name: name.to_string(),
            team_abbrevs: Some("MTL".to_string()),
            position_code: Some("C".to_string()),
            games_played: 10,
            goals: 5,
            assists: 5,
            points: 10,
            shots: 30,
        }
    }

    fn season() -> Season {
        "20232024".parse().unwrap()
    }

    #[test]
    fn recent_window_keeps_trailing_entries() {
        let log: Vec<GameLogEntry> = (1..=7).map(|id| entry(id, id as u32, 0, "10:00")).collect();

        let window = recent_window(&log, 5);
        let shots: Vec<u32> = window.iter().map(|g| g.shots).collect();
        assert_eq!(shots, vec![3, 4, 5, 6, 7]);

        assert_eq!(recent_window(&log[..2], 5).len(), 2);
        assert!(recent_window(&[], 5).is_empty());
    }

    #[test]
    fn recent_window_orders_newest_first_logs_by_date() {
        let dated = |game_id: i64, date: &str, shots: u32| GameLogEntry {
            game_date: Some(date.to_string()),
            ..entry(game_id, shots, 0, "15:00")
        };
        // Newest first, as the game log endpoint lists it
        let log = vec![
            dated(2023021301, "2024-04-18", 7),
            dated(2023021290, "2024-04-16", 6),
            dated(2023021275, "2024-04-14", 5),
            dated(2023021260, "2024-04-12", 4),
            dated(2023021245, "2024-04-10", 3),
            dated(2023020012, "2023-10-12", 2),
            dated(2023020001, "2023-10-10", 1),
        ];

        let shots: Vec<u32> = recent_window(&log, 5).iter().map(|g| g.shots).collect();
        assert_eq!(shots, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn recent_window_falls_back_to_game_id_without_dates() {
        let log = vec![entry(30, 3, 0, "15:00"), entry(10, 1, 0, "15:00"), entry(20, 2, 0, "15:00")];

        let shots: Vec<u32> = recent_window(&log, 2).iter().map(|g| g.shots).collect();
        assert_eq!(shots, vec![2, 3]);
    }

    #[tokio::test]
    async fn ranks_and_joins_summaries() {
        let source = InMemoryStatsSource::new()
            .with_skaters(vec![skater(1, "Shooter"), skater(2, "Sniper"), skater(3, "Grinder")])
            .with_game_log(1, vec![entry(10, 5, 0, "15:00")])
            .with_game_log(2, vec![entry(10, 4, 2, "18:00")])
            .with_game_log(3, vec![entry(10, 0, 0, "12:00")]);
        let service = TopPlayersService::new(Arc::new(source), LeaderboardConfig::default());

        let players = service.top_players(season()).await.unwrap();

        let names: Vec<&str> = players.iter().map(|p| p.skater_full_name.as_str()).collect();
        assert_eq!(names, vec!["Sniper", "Shooter"]);
        assert_eq!(players[0].player_id, 2);
        assert_eq!(players[0].team_abbrevs.as_deref(), Some("MTL"));
        assert!(players[0].score > players[1].score);
    }

    #[tokio::test]
    async fn one_failed_game_log_fails_the_request() {
        let source = InMemoryStatsSource::new()
            .with_skaters(vec![skater(1, "Shooter"), skater(2, "Sniper")])
            .with_game_log(1, vec![entry(10, 5, 0, "15:00")])
            .with_game_log(2, vec![entry(10, 4, 2, "18:00")])
            .with_failing_player(2);
        let service = TopPlayersService::new(Arc::new(source), LeaderboardConfig::default());

        let result = service.top_players(season()).await;
        assert!(matches!(result, Err(AppError::UpstreamUnavailable(_))));
    }

    #[tokio::test]
    async fn truncates_to_configured_top_n() {
        let skaters: Vec<SkaterSummary> = (1..=6).map(|id| skater(id, "Skater")).collect();
        let source = skaters.iter().fold(
            InMemoryStatsSource::new().with_skaters(skaters.clone()),
            |source, s| source.with_game_log(s.player_id, vec![entry(1, 3, 1, "16:00")]),
        );
        let config = LeaderboardConfig {
            top_n: 4,
            concurrency: 2,
            ..LeaderboardConfig::default()
        };
        let service = TopPlayersService::new(Arc::new(source), config);

        let players = service.top_players(season()).await.unwrap();
        let ids: Vec<i64> = players.iter().map(|p| p.player_id).collect();
        // Identical scores keep summary order
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
