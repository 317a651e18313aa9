use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};

use super::types::TeamStats;
use crate::shared::{AppError, AppState};
use crate::stats_source::Season;

/// HTTP handler for regular season team standings
///
/// GET /api/team-stats/:season
#[instrument(name = "team_stats", skip(state))]
pub async fn team_stats(
    State(state): State<AppState>,
    Path(season): Path<String>,
) -> Result<Json<Vec<TeamStats>>, AppError> {
    let season: Season = season.parse().map_err(AppError::BadRequest)?;

    let teams: Vec<TeamStats> = state
        .stats_source
        .team_summaries(season)
        .await?
        .into_iter()
        .map(TeamStats::from)
        .collect();

    info!(season = %season, team_count = teams.len(), "Team stats fetched");
    Ok(Json(teams))
}
