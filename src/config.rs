use chrono_tz::Tz;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::leaderboard::LeaderboardConfig;
use crate::performance::reference;
use crate::session::TokenConfig;
use crate::stats_source::NhlApiConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Process configuration, read once at start-up and handed to each collaborator.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub nhl_web_api_url: String,
    pub nhl_stats_api_url: String,
    pub http_timeout_secs: u64,
    pub game_log_concurrency: usize,
    pub game_log_window: usize,
    pub top_players_summary_limit: usize,
    pub top_players_limit: usize,
    /// Zone used to render kick-off times on the score board.
    pub display_timezone: Tz,
    /// Shared HS256 secret of the auth provider. Token checks need it.
    pub jwt_secret: Option<String>,
    pub token_expiration_hours: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let nhl = NhlApiConfig::default();
        Self {
            port: 5000,
            database_url: None,
            nhl_web_api_url: nhl.web_base_url,
            nhl_stats_api_url: nhl.stats_base_url,
            http_timeout_secs: nhl.timeout.as_secs(),
            game_log_concurrency: 16,
            game_log_window: reference::GAME_WINDOW,
            top_players_summary_limit: 150,
            top_players_limit: 50,
            display_timezone: chrono_tz::Europe::Paris,
            jwt_secret: None,
            token_expiration_hours: 1,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            port: env_or("PORT", defaults.port),
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|url| !url.is_empty()),
            nhl_web_api_url: env_or("NHL_WEB_API_URL", defaults.nhl_web_api_url),
            nhl_stats_api_url: env_or("NHL_STATS_API_URL", defaults.nhl_stats_api_url),
            http_timeout_secs: env_or("HTTP_TIMEOUT_SECS", defaults.http_timeout_secs),
            game_log_concurrency: env_or("GAME_LOG_CONCURRENCY", defaults.game_log_concurrency)
                .max(1),
            game_log_window: env_or("GAME_LOG_WINDOW", defaults.game_log_window),
            top_players_summary_limit: env_or(
                "TOP_PLAYERS_SUMMARY_LIMIT",
                defaults.top_players_summary_limit,
            ),
            top_players_limit: env_or("TOP_PLAYERS_LIMIT", defaults.top_players_limit),
            display_timezone: env_or("DISPLAY_TIMEZONE", defaults.display_timezone),
            jwt_secret: std::env::var("JWT_SECRET")
                .ok()
                .filter(|secret| !secret.is_empty()),
            token_expiration_hours: env_or(
                "TOKEN_EXPIRATION_HOURS",
                defaults.token_expiration_hours,
            ),
        }
    }

    pub fn nhl_api(&self) -> NhlApiConfig {
        NhlApiConfig {
            web_base_url: self.nhl_web_api_url.clone(),
            stats_base_url: self.nhl_stats_api_url.clone(),
            timeout: Duration::from_secs(self.http_timeout_secs),
        }
    }

    pub fn leaderboard(&self) -> LeaderboardConfig {
        LeaderboardConfig {
            summary_limit: self.top_players_summary_limit,
            game_window: self.game_log_window,
            top_n: self.top_players_limit,
            concurrency: self.game_log_concurrency.max(1),
        }
    }

    /// There is no built-in secret: without `JWT_SECRET` the server does not start.
    pub fn token_config(&self) -> Result<TokenConfig, ConfigError> {
        let secret = self
            .jwt_secret
            .as_deref()
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        Ok(TokenConfig::with_secret(secret, self.token_expiration_hours))
    }
}
