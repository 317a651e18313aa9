use axum::{extract::State, Extension, Json};
use tracing::{info, instrument, warn};

use super::types::UserInfoResponse;
use crate::session::UserClaims;
use crate::shared::{AppError, AppState};

/// HTTP handler for the authenticated account's details
///
/// GET /api/user-info
/// Requires the jwt_auth middleware
#[instrument(name = "user_info", skip(state, claims), fields(account_id = claims.id))]
pub async fn user_info(
    State(state): State<AppState>,
    Extension(claims): Extension<UserClaims>,
) -> Result<Json<UserInfoResponse>, AppError> {
    info!("Fetching user info");

    let account = state
        .account_repository
        .get_account(claims.id)
        .await?
        .ok_or_else(|| {
            warn!("Authenticated account not found");
            AppError::NotFound("User not found".to_string())
        })?;

    Ok(Json(UserInfoResponse {
        user_info: account.into(),
    }))
}
