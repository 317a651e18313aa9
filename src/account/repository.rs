use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::AccountModel;
use crate::shared::AppError;

/// Trait for account store operations
#[async_trait]
pub trait AccountRepository {
    async fn get_account(&self, account_id: i64) -> Result<Option<AccountModel>, AppError>;
}

/// In-memory implementation of AccountRepository for development and testing
///
/// Accounts are created by the external auth provider, so this store only
/// holds what it was seeded with.
pub struct InMemoryAccountRepository {
    accounts: Mutex<HashMap<i64, AccountModel>>,
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
        }
    }

    /// Creates an in-memory repository with pre-populated accounts
    pub fn with_accounts(accounts: Vec<AccountModel>) -> Self {
        let account_map = accounts
            .into_iter()
            .map(|account| (account.id, account))
            .collect();

        Self {
            accounts: Mutex::new(account_map),
        }
    }

    pub fn account_count(&self) -> usize {
        self.accounts
            .lock()
            .map(|accounts| accounts.len())
            .unwrap_or_default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    #[instrument(skip(self))]
    async fn get_account(&self, account_id: i64) -> Result<Option<AccountModel>, AppError> {
        debug!(account_id, "Fetching account from memory");

        let accounts = self.accounts.lock().map_err(|_| {
            warn!("Account store lock poisoned");
            AppError::Internal
        })?;
        let account = accounts.get(&account_id).cloned();

        match &account {
            Some(a) => debug!(account_id, pseudo = %a.pseudo, "Account found in memory"),
            None => debug!(account_id, "Account not found in memory"),
        }

        Ok(account)
    }
}

/// PostgreSQL implementation of account repository
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    #[instrument(skip(self))]
    async fn get_account(&self, account_id: i64) -> Result<Option<AccountModel>, AppError> {
        debug!(account_id, "Fetching account from database");

        let row = sqlx::query(
            "SELECT id, email, pseudo, is_premium, created_date FROM users WHERE id = $1",
        )
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, account_id, "Failed to fetch account from database");
            AppError::DatabaseError(e.to_string())
        })?;

        let account = match row {
            Some(row) => {
                let account = AccountModel {
                    id: row.get("id"),
                    email: row.get("email"),
                    pseudo: row.get("pseudo"),
                    is_premium: row.get("is_premium"),
                    created_date: row.get("created_date"),
                };
                debug!(account_id, pseudo = %account.pseudo, "Account found in database");
                Some(account)
            }
            None => {
                debug!(account_id, "Account not found in database");
                None
            }
        };

        Ok(account)
    }
}
