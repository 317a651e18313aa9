use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde_json::Value;
use tracing::{info, instrument};

use super::types::{MatchSummary, ScoreMatchesQuery};
use crate::shared::{AppError, AppState};

/// GET /match/:id
#[instrument(name = "match_details", skip(state))]
pub async fn match_details(
    State(state): State<AppState>,
    Path(game_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    info!(game_id, "Fetching match details");
    let details = state.stats_source.game_landing(game_id).await?;
    Ok(Json(details))
}

/// GET /rosters/:match_id
#[instrument(name = "match_rosters", skip(state))]
pub async fn match_rosters(
    State(state): State<AppState>,
    Path(game_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    info!(game_id, "Fetching match rosters");
    let rosters = state.stats_source.game_rosters(game_id).await?;
    Ok(Json(rosters))
}

/// HTTP handler for the current week's schedule
///
/// GET /matches-week
/// The week starts at today's UTC date
#[instrument(name = "matches_week", skip(state))]
pub async fn matches_week(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let today = Utc::now().date_naive();
    info!(date = %today, "Fetching week schedule");
    let schedule = state.stats_source.week_schedule(today).await?;
    Ok(Json(schedule))
}

/// HTTP handler for a day's score board
///
/// GET /score-matches?date=YYYY-MM-DD
/// Returns one summary per game with kick-off in the display time zone
#[instrument(name = "score_matches", skip(state))]
pub async fn score_matches(
    State(state): State<AppState>,
    Query(query): Query<ScoreMatchesQuery>,
) -> Result<Json<Vec<MatchSummary>>, AppError> {
    let raw_date = query
        .date
        .ok_or_else(|| AppError::BadRequest("date is required".to_string()))?;
    let date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("invalid date {raw_date:?}")))?;

    let games = state.stats_source.scores(date).await?;
    let zone = state.config.display_timezone;
    let matches: Vec<MatchSummary> = games
        .into_iter()
        .map(|game| MatchSummary::from_scoreboard(game, &zone))
        .collect();

    info!(date = %date, match_count = matches.len(), "Score board built");
    Ok(Json(matches))
}
