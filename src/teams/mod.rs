pub use handlers::team_stats;
pub use types::TeamStats;

mod handlers;
mod types;
