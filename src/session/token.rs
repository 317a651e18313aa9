use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, instrument};

use super::types::UserClaims;
use crate::account::models::AccountModel;
use crate::shared::AppError;

/// HS256 keys shared with the auth provider, built once from its secret.
///
/// Construct through [`crate::AppConfig::token_config`], which refuses to run
/// without a secret.
#[derive(Clone)]
pub struct TokenConfig {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    pub expiration_hours: i64,
}

impl TokenConfig {
    pub fn with_secret(secret: impl AsRef<[u8]>, expiration_hours: i64) -> Self {
        let secret = secret.as_ref();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::default(),
            expiration_hours,
        }
    }

    /// Signs claims for `account`, the way the auth provider issues them.
    #[instrument(skip(self, account), fields(account_id = account.id))]
    pub fn create_token(&self, account: &AccountModel) -> Result<String, AppError> {
        let issued_at = Utc::now();
        let claims = UserClaims {
            id: account.id,
            email: account.email.clone(),
            pseudo: account.pseudo.clone(),
            is_premium: account.is_premium,
            exp: (issued_at + Duration::hours(self.expiration_hours)).timestamp() as usize,
            iat: issued_at.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::JwtError(e.to_string()))
    }

    /// Signature and expiry check of a bearer token.
    #[instrument(skip(self, token))]
    pub fn validate_token(&self, token: &str) -> Result<UserClaims, AppError> {
        let claims = decode::<UserClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!(error = %e, "Rejected bearer token");
                AppError::JwtError(e.to_string())
            })?
            .claims;

        debug!(account_id = claims.id, exp = claims.exp, "Bearer token accepted");
        Ok(claims)
    }
}
