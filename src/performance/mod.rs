pub mod models;
pub mod scorer;

pub use models::{DurationError, GameRecord, PlayerRecord, TimeOnIce};
pub use scorer::{PerformanceScorer, SignalBreakdown};

use strum_macros::EnumIter;

/// Reference constants of the weighted-sum model.
pub mod reference {
    /// Average time on ice per game (25 minutes) that maps to a full TOI signal.
    pub const TOI_SECONDS_PER_GAME: f64 = 1500.0;
    /// Scale applied to power-play goals per minute.
    pub const POWER_PLAY_FACTOR: f64 = 0.8;
    /// Divisor applied to shots per minute.
    pub const SHOOTING_OPPORTUNITY_DIVISOR: f64 = 100.0;
    /// Games of each player's log the leaderboard scores.
    pub const GAME_WINDOW: usize = 5;
}

/// The terms of the composite performance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum PerformanceSignal {
    GoalShotRatio,
    PowerPlayInfluence,
    ToiInfluence,
    RecentGoals,
    ShootingOpportunities,
}

/// Weight applied to each [`PerformanceSignal`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub goal_shot_ratio: f64,
    pub power_play_influence: f64,
    pub toi_influence: f64,
    pub recent_goals: f64,
    pub shooting_opportunities: f64,
}

impl ScoreWeights {
    pub fn weight(&self, signal: PerformanceSignal) -> f64 {
        match signal {
            PerformanceSignal::GoalShotRatio => self.goal_shot_ratio,
            PerformanceSignal::PowerPlayInfluence => self.power_play_influence,
            PerformanceSignal::ToiInfluence => self.toi_influence,
            PerformanceSignal::RecentGoals => self.recent_goals,
            PerformanceSignal::ShootingOpportunities => self.shooting_opportunities,
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            goal_shot_ratio: 0.5,
            power_play_influence: 0.3,
            toi_influence: 0.2,
            recent_goals: 0.2,
            shooting_opportunities: 0.3,
        }
    }
}
