// Library crate for the hockey stats server
// This file exposes the public API for integration tests

pub mod account;
pub mod config;
pub mod games;
pub mod leaderboard;
pub mod performance;
pub mod players;
pub mod router;
pub mod session;
pub mod shared;
pub mod stats_source;
pub mod teams;

// Re-export commonly used types for easier access in tests
pub use config::AppConfig;
pub use leaderboard::{LeaderboardConfig, RankedPlayer, TopPlayersService};
pub use performance::{GameRecord, PerformanceScorer, PlayerRecord};
pub use router::build_router;
pub use shared::{AppError, AppState};
pub use stats_source::{InMemoryStatsSource, NhlStatsClient, StatsSource};
