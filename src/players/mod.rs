pub use handlers::{goalie_milestones, player_landing, player_season_stats, skater_milestones};

mod handlers;
