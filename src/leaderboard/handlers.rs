use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{service::TopPlayersService, types::TopPlayersQuery, RankedPlayer};
use crate::shared::{AppError, AppState};
use crate::stats_source::Season;

/// HTTP handler for the performance leaderboard
///
/// GET /top-players?seasonId=20232024
/// Returns skaters ranked by their recent performance score
#[instrument(name = "top_players", skip(state))]
pub async fn top_players(
    State(state): State<AppState>,
    Query(query): Query<TopPlayersQuery>,
) -> Result<Json<Vec<RankedPlayer>>, AppError> {
    let season: Season = query
        .season_id
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("seasonId is required".to_string()))?
        .parse::<Season>()
        .map_err(|e| {
            warn!(error = %e, "Rejected season");
            AppError::BadRequest(e)
        })?;

    info!(season = %season, "Computing top players");

    let service = TopPlayersService::new(
        Arc::clone(&state.stats_source),
        state.config.leaderboard(),
    );
    let players = service.top_players(season).await?;

    info!(player_count = players.len(), "Top players computed");

    Ok(Json(players))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::AppStateBuilder;
    use crate::stats_source::{GameLogEntry, InMemoryStatsSource, SkaterSummary};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use tower::ServiceExt; // for `oneshot`

    fn app(source: InMemoryStatsSource) -> Router {
        let state = AppStateBuilder::new()
            .with_stats_source(Arc::new(source))
            .build();
        Router::new()
            .route("/top-players", axum::routing::get(top_players))
            .with_state(state)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_top_players_handler() {
        let source = InMemoryStatsSource::new()
            .with_skaters(vec![SkaterSummary {
                player_id: 8478402,
                skater_full_name: "Connor McDavid".to_string(),
                team_abbrevs: Some("EDM".to_string()),
                position_code: Some("C".to_string()),
                games_played: 76,
                goals: 32,
                assists: 100,
                points: 132,
                shots: 263,
            }])
            .with_game_log(
                8478402,
                vec![GameLogEntry {
                    game_id: 2023020001,
                    game_date: Some("2023-10-10".to_string()),
                    opponent_abbrev: Some("VAN".to_string()),
                    goals: 2,
                    assists: 1,
                    shots: 4,
                    power_play_goals: Some(1),
                    toi: Some("18:00".to_string()),
                }],
            );

        let response = app(source)
            .oneshot(get("/top-players?seasonId=20232024"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json[0]["playerId"], 8478402);
        assert_eq!(json[0]["skaterFullName"], "Connor McDavid");
        assert_eq!(json[0]["recentGames"][0]["timeOnIce"], "18:00");
        let score = json[0]["score"].as_f64().unwrap();
        assert!((score - 0.4302).abs() < 1e-3);
    }

    #[tokio::test]
    async fn test_top_players_requires_season() {
        let response = app(InMemoryStatsSource::new())
            .oneshot(get("/top-players"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_top_players_rejects_malformed_season() {
        let response = app(InMemoryStatsSource::new())
            .oneshot(get("/top-players?seasonId=2024"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_top_players_empty_league() {
        let response = app(InMemoryStatsSource::new())
            .oneshot(get("/top-players?seasonId=20232024"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let players: Vec<RankedPlayer> = serde_json::from_slice(&body).unwrap();
        assert!(players.is_empty());
    }
}
