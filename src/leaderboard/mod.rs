pub use handlers::top_players;
pub use service::{recent_window, TopPlayersService};
pub use types::{RankedPlayer, TopPlayersQuery};

mod handlers;
mod service;
mod types;

use crate::performance::reference;

/// Sizes of the top players computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardConfig {
    /// Skater summaries requested from the stats source.
    pub summary_limit: usize,
    /// Trailing game log entries attached to each skater.
    pub game_window: usize,
    /// Players kept after ranking.
    pub top_n: usize,
    /// Game log requests in flight at once.
    pub concurrency: usize,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            summary_limit: 150,
            game_window: reference::GAME_WINDOW,
            top_n: 50,
            concurrency: 16,
        }
    }
}
