use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::shared::AppState;
use crate::{account, games, leaderboard, players, session, teams};

/// Builds every route of the service around the given state
pub fn build_router(state: AppState) -> Router {
    let authenticated = Router::new()
        .route("/api/user-info", get(account::user_info))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session::jwt_auth,
        ));

    Router::new()
        .route("/", get(|| async { "Hockey stats server" }))
        .route("/top-players", get(leaderboard::top_players))
        .route("/match/:id", get(games::match_details))
        .route("/rosters/:match_id", get(games::match_rosters))
        .route("/matches-week", get(games::matches_week))
        .route("/score-matches", get(games::score_matches))
        .route("/api/player/:player_id", get(players::player_landing))
        .route(
            "/api/player/:player_id/stats/:season",
            get(players::player_season_stats),
        )
        .route("/api/milestones/skaters", get(players::skater_milestones))
        .route("/api/milestones/goalies", get(players::goalie_milestones))
        .route("/api/team-stats/:season", get(teams::team_stats))
        .merge(authenticated)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
