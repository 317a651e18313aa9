pub use handlers::{match_details, match_rosters, matches_week, score_matches};
pub use types::{MatchSummary, MatchTeams, ScoreMatchesQuery, TeamScore};

mod handlers;
mod types;
