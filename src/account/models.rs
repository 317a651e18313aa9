use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database model for the users table
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct AccountModel {
    pub id: i64,
    pub email: String,
    pub pseudo: String,
    pub is_premium: bool,
    pub created_date: DateTime<Utc>,
}

impl AccountModel {
    /// Creates an account record stamped with the current time
    pub fn new(id: i64, email: impl Into<String>, pseudo: impl Into<String>, is_premium: bool) -> Self {
        Self {
            id,
            email: email.into(),
            pseudo: pseudo.into(),
            is_premium,
            created_date: Utc::now(),
        }
    }
}
