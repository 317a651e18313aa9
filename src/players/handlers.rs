use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::{info, instrument};

use crate::shared::{AppError, AppState};
use crate::stats_source::{MilestoneKind, Season};

/// GET /api/player/:player_id
#[instrument(name = "player_landing", skip(state))]
pub async fn player_landing(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    info!(player_id, "Fetching player landing");
    Ok(Json(state.stats_source.player_landing(player_id).await?))
}

/// GET /api/player/:player_id/stats/:season
/// Regular season game log, untouched
#[instrument(name = "player_season_stats", skip(state))]
pub async fn player_season_stats(
    State(state): State<AppState>,
    Path((player_id, season)): Path<(i64, String)>,
) -> Result<Json<Value>, AppError> {
    let season: Season = season.parse().map_err(AppError::BadRequest)?;
    info!(player_id, season = %season, "Fetching player game log");
    Ok(Json(
        state
            .stats_source
            .player_game_log_raw(player_id, season)
            .await?,
    ))
}

/// GET /api/milestones/skaters
#[instrument(name = "skater_milestones", skip(state))]
pub async fn skater_milestones(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    milestones(&state, MilestoneKind::Skaters).await
}

/// GET /api/milestones/goalies
#[instrument(name = "goalie_milestones", skip(state))]
pub async fn goalie_milestones(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    milestones(&state, MilestoneKind::Goalies).await
}

async fn milestones(state: &AppState, kind: MilestoneKind) -> Result<Json<Value>, AppError> {
    info!(kind = %kind, "Fetching milestones");
    Ok(Json(state.stats_source.milestones(kind).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::AppStateBuilder;
    use crate::stats_source::{GameLogEntry, InMemoryStatsSource};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
        Router,
    };
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt; // for `oneshot`

    fn app(source: InMemoryStatsSource) -> Router {
        let state = AppStateBuilder::new()
            .with_stats_source(Arc::new(source))
            .build();
        Router::new()
            .route("/api/player/:player_id", get(player_landing))
            .route(
                "/api/player/:player_id/stats/:season",
                get(player_season_stats),
            )
            .route("/api/milestones/skaters", get(skater_milestones))
            .route("/api/milestones/goalies", get(goalie_milestones))
            .with_state(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_player_landing() {
        let source = InMemoryStatsSource::new().with_document(
            "player/8478402/landing",
            json!({"playerId": 8478402, "firstName": {"default": "Connor"}}),
        );

        let (status, json) = get_json(app(source), "/api/player/8478402").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["firstName"]["default"], "Connor");
    }

    #[tokio::test]
    async fn test_player_season_stats() {
        let source = InMemoryStatsSource::new().with_game_log(
            8478402,
            vec![GameLogEntry {
                game_id: 2023020001,
                game_date: Some("2023-10-10".to_string()),
                opponent_abbrev: Some("VAN".to_string()),
                goals: 0,
                assists: 1,
                shots: 3,
                power_play_goals: Some(0),
                toi: Some("21:07".to_string()),
            }],
        );

        let (status, json) = get_json(app(source), "/api/player/8478402/stats/20232024").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["gameLog"][0]["toi"], "21:07");
    }

    #[tokio::test]
    async fn test_player_season_stats_rejects_bad_season() {
        let (status, _) = get_json(app(InMemoryStatsSource::new()), "/api/player/1/stats/now").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_milestones_by_kind() {
        let source = InMemoryStatsSource::new()
            .with_document("milestones/skaters", json!({"data": [{"playerId": 1}]}))
            .with_document("milestones/goalies", json!({"data": []}));
        let app = app(source);

        let (status, skaters) = get_json(app.clone(), "/api/milestones/skaters").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(skaters["data"][0]["playerId"], 1);

        let (status, goalies) = get_json(app, "/api/milestones/goalies").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(goalies, json!({"data": []}));
    }
}
