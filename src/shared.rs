use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::account::repository::AccountRepository;
use crate::config::AppConfig;
use crate::session::TokenConfig;
use crate::stats_source::{StatsSource, StatsSourceError};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub stats_source: Arc<dyn StatsSource>,
    pub account_repository: Arc<dyn AccountRepository + Send + Sync>,
    pub token_config: TokenConfig,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(
        stats_source: Arc<dyn StatsSource>,
        account_repository: Arc<dyn AccountRepository + Send + Sync>,
        token_config: TokenConfig,
        config: AppConfig,
    ) -> Self {
        Self {
            stats_source,
            account_repository,
            token_config,
            config,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("JWT error: {0}")]
    JwtError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Internal server error")]
    Internal,
}

impl From<StatsSourceError> for AppError {
    fn from(error: StatsSourceError) -> Self {
        AppError::UpstreamUnavailable(error.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::JwtError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::UpstreamUnavailable(msg) => (
                StatusCode::BAD_GATEWAY,
                format!("Stats provider unavailable: {}", msg),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
