use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::models::AccountModel;

/// Account details visible to the account owner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub email: String,
    pub is_premium: bool,
    pub created_date: DateTime<Utc>,
}

/// Response structure for the user info endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoResponse {
    pub user_info: UserInfo,
}

impl From<AccountModel> for UserInfo {
    fn from(account: AccountModel) -> Self {
        Self {
            email: account.email,
            is_premium: account.is_premium,
            created_date: account.created_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_response_shape() {
        let account = AccountModel::new(1, "fan@example.com", "habsfan", true);
        let response = UserInfoResponse {
            user_info: account.into(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["userInfo"]["email"], "fan@example.com");
        assert_eq!(json["userInfo"]["is_premium"], true);
        assert!(json["userInfo"]["created_date"].is_string());
        assert!(json["userInfo"].get("pseudo").is_none());
    }
}
