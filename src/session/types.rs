use serde::{Deserialize, Serialize};

/// JWT claims identifying an authenticated account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserClaims {
    pub id: i64,
    pub email: String,
    pub pseudo: String,
    pub is_premium: bool,
    pub exp: usize, // Expiration timestamp (standard JWT claim)
    pub iat: usize, // Issued at timestamp (standard JWT claim)
}
