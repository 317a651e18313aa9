use strum::IntoEnumIterator;
use tracing::{debug, instrument};

use super::{reference, GameRecord, PerformanceSignal, PlayerRecord, ScoreWeights};

/// Per-signal values for one player's window, before weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalBreakdown {
    pub goal_shot_ratio: f64,
    pub power_play_influence: f64,
    pub toi_influence: f64,
    pub recent_goals: f64,
    pub shooting_opportunities: f64,
}

impl SignalBreakdown {
    /// Returns `None` when the window has no shots or no parsable time on ice,
    /// in which case the player scores zero.
    pub fn from_games(games: &[GameRecord]) -> Option<Self> {
        let total_shots: u64 = games.iter().map(|g| u64::from(g.shots)).sum();
        let total_goals: u64 = games.iter().map(|g| u64::from(g.goals)).sum();
        let total_pp_goals: u64 = games.iter().map(|g| u64::from(g.power_play_goals())).sum();
        let total_toi_seconds: u64 = games
            .iter()
            .map(|g| u64::from(g.time_on_ice_seconds()))
            .sum();

        if total_shots == 0 || total_toi_seconds == 0 {
            return None;
        }

        let toi_minutes = total_toi_seconds as f64 / 60.0;
        let shots_per_minute = total_shots as f64 / toi_minutes;
        let goals_per_minute = total_goals as f64 / toi_minutes;
        let pp_goals_per_minute = total_pp_goals as f64 / toi_minutes;

        Some(Self {
            goal_shot_ratio: goals_per_minute / shots_per_minute,
            power_play_influence: pp_goals_per_minute * reference::POWER_PLAY_FACTOR,
            toi_influence: total_toi_seconds as f64
                / (reference::TOI_SECONDS_PER_GAME * games.len() as f64),
            recent_goals: goals_per_minute,
            shooting_opportunities: shots_per_minute / reference::SHOOTING_OPPORTUNITY_DIVISOR,
        })
    }

    pub fn value(&self, signal: PerformanceSignal) -> f64 {
        match signal {
            PerformanceSignal::GoalShotRatio => self.goal_shot_ratio,
            PerformanceSignal::PowerPlayInfluence => self.power_play_influence,
            PerformanceSignal::ToiInfluence => self.toi_influence,
            PerformanceSignal::RecentGoals => self.recent_goals,
            PerformanceSignal::ShootingOpportunities => self.shooting_opportunities,
        }
    }
}

/// Ranks players by a weighted sum of per-minute signals over their recent games.
#[derive(Debug, Clone, Default)]
pub struct PerformanceScorer {
    weights: ScoreWeights,
}

impl PerformanceScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, games: &[GameRecord]) -> f64 {
        SignalBreakdown::from_games(games)
            .map(|breakdown| {
                PerformanceSignal::iter()
                    .map(|signal| self.weights.weight(signal) * breakdown.value(signal))
                    .sum::<f64>()
            })
            .unwrap_or_default()
    }

    /// Scores every eligible player, then returns the best `top_n` in
    /// descending score order. Equal scores keep their input order.
    /// Players without a single shot in their window are dropped unscored.
    #[instrument(skip(self, players), fields(player_count = players.len()))]
    pub fn rank(&self, players: Vec<PlayerRecord>, top_n: usize) -> Vec<PlayerRecord> {
        let mut ranked: Vec<PlayerRecord> = players
            .into_iter()
            .filter(PlayerRecord::is_eligible)
            .map(|mut player| {
                let score = self.score(&player.recent_games);
                debug!(
                    player_id = %player.player_id,
                    score,
                    signals = ?SignalBreakdown::from_games(&player.recent_games),
                    "Scored player"
                );
                player.score = Some(score);
                player
            })
            .collect();

        let eligible = ranked.len();
        ranked.sort_by(|a, b| {
            let a = a.score.unwrap_or_default();
            let b = b.score.unwrap_or_default();
            b.total_cmp(&a)
        });
        ranked.truncate(top_n);

        debug!(eligible, returned = ranked.len(), "Ranked players");
        ranked
    }
}
