use std::sync::Arc;

use puckstats::{
    account::repository::{AccountRepository, InMemoryAccountRepository, PostgresAccountRepository},
    build_router,
    AppConfig, AppState, NhlStatsClient,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "puckstats=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting hockey stats server");

    let config = AppConfig::from_env();
    let token_config = config
        .token_config()
        .expect("Refusing to start without a token secret");

    let stats_source =
        Arc::new(NhlStatsClient::new(config.nhl_api()).expect("Failed to build NHL API client"));

    let account_repository: Arc<dyn AccountRepository + Send + Sync> = match &config.database_url
    {
        Some(database_url) => {
            let pool = sqlx::PgPool::connect(database_url)
                .await
                .expect("Failed to connect to database");
            info!("Using PostgreSQL account store");
            Arc::new(PostgresAccountRepository::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set, using empty in-memory account store");
            Arc::new(InMemoryAccountRepository::new())
        }
    };

    let port = config.port;
    let app_state = AppState::new(stats_source, account_repository, token_config, config);
    let app = build_router(app_state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("Failed to bind listener");
    info!("Server running on http://localhost:{}", port);
    axum::serve(listener, app).await.expect("Server error");
}
