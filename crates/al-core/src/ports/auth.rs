//! Auth provider port
//!
//! Contract of the hosted authentication backend: account creation and the
//! targeted profile-row update keyed by user id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ids::UserId;
use crate::ports::errors::{AuthProviderError, ProviderError};
use crate::security::SecretString;

/// User record returned by account creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUser {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Structured result of account creation.
///
/// Either field may be absent; the use case decides what a missing user
/// means.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateAccountResponse {
    pub user: Option<AccountUser>,
    pub error: Option<ProviderError>,
}

impl CreateAccountResponse {
    pub fn created(user: AccountUser) -> Self {
        Self {
            user: Some(user),
            error: None,
        }
    }

    pub fn failed(error: ProviderError) -> Self {
        Self {
            user: None,
            error: Some(error),
        }
    }
}

/// Fields patched on the profile row after account creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
}

#[async_trait]
pub trait AuthProviderPort: Send + Sync {
    /// Create an account.
    ///
    /// `Err` means the call itself failed; provider-side rejections come back
    /// as `Ok` with `error` set.
    async fn create_account(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<CreateAccountResponse, AuthProviderError>;

    /// Update the profile row of `user_id`.
    async fn update_profile(
        &self,
        user_id: &UserId,
        update: &ProfileUpdate,
    ) -> Result<(), ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_account_user_email_is_optional() {
        let user: AccountUser = serde_json::from_value(json!({"id": "u1"})).unwrap();
        assert_eq!(user.id, UserId::from("u1"));
        assert!(user.email.is_none());
        assert_eq!(serde_json::to_value(&user).unwrap(), json!({"id": "u1"}));
    }

    #[test]
    fn test_created_and_failed_responses() {
        let created = CreateAccountResponse::created(AccountUser {
            id: UserId::from("u1"),
            email: None,
        });
        assert!(created.error.is_none());

        let failed = CreateAccountResponse::failed(ProviderError::new("taken"));
        assert!(failed.user.is_none());
        assert_eq!(failed.error.unwrap().message, "taken");
    }
}
