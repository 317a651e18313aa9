use axum::Router;
use std::sync::Arc;

use puckstats::{
    account::{models::AccountModel, repository::InMemoryAccountRepository},
    build_router,
    session::TokenConfig,
    stats_source::{GameLogEntry, SkaterSummary},
    AppConfig, AppState, InMemoryStatsSource,
};

pub const TEST_SECRET: &str = "integration-secret";

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub app: Router,
    pub state: AppState,
    pub stats_source: Arc<InMemoryStatsSource>,
}

impl TestSetup {
    pub fn token_for(&self, account: &AccountModel) -> String {
        self.state
            .token_config
            .create_token(account)
            .expect("token should be issued")
    }
}

pub struct TestSetupBuilder {
    source: InMemoryStatsSource,
    accounts: Vec<AccountModel>,
    config: AppConfig,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            source: InMemoryStatsSource::new(),
            accounts: vec![],
            config: AppConfig::default(),
        }
    }

    pub fn with_skaters(mut self, skaters: Vec<SkaterSummary>) -> Self {
        self.source = self.source.with_skaters(skaters);
        self
    }

    pub fn with_game_log(mut self, player_id: i64, entries: Vec<GameLogEntry>) -> Self {
        self.source = self.source.with_game_log(player_id, entries);
        self
    }

    pub fn with_failing_player(mut self, player_id: i64) -> Self {
        self.source = self.source.with_failing_player(player_id);
        self
    }

    pub fn with_account(mut self, account: AccountModel) -> Self {
        self.accounts.push(account);
        self
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> TestSetup {
        let stats_source = Arc::new(self.source);
        let state = AppState::new(
            stats_source.clone(),
            Arc::new(InMemoryAccountRepository::with_accounts(self.accounts)),
            TokenConfig::with_secret(TEST_SECRET, 1),
            self.config,
        );

        TestSetup {
            app: build_router(state.clone()),
            state,
            stats_source,
        }
    }
}
