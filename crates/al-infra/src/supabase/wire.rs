//! Request/response shapes of the GoTrue and PostgREST endpoints.

use al_core::ports::{AccountUser, ProviderError};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Serialize)]
pub(crate) struct SignupBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of a successful signup, split into the user object and the access
/// token of the session, if one was issued.
///
/// GoTrue answers with `{access_token, user, ...}` (or `{user, session}`)
/// when new accounts are confirmed automatically, and with the bare user
/// object while email confirmation is pending.
pub(crate) fn split_signup_body(body: &Value) -> (Option<&Value>, Option<String>) {
    let session_token = body
        .get("access_token")
        .or_else(|| body.get("session").and_then(|s| s.get("access_token")))
        .and_then(Value::as_str)
        .map(str::to_string);

    let user = match body.get("user") {
        Some(user) if user.is_object() => Some(user),
        Some(_) => None,
        None if body.get("id").is_some() => Some(body),
        None => None,
    };

    (user, session_token)
}

/// Typed view of the user object. A user without a string `id` counts as
/// absent.
pub(crate) fn parse_account_user(user: &Value) -> Option<AccountUser> {
    match AccountUser::deserialize(user) {
        Ok(user) => Some(user),
        Err(err) => {
            warn!(error = %err, "signup user object is unusable");
            None
        }
    }
}

/// Build a provider error from a non-success response.
///
/// GoTrue uses `msg` / `error_description` / `error_code`; PostgREST uses
/// `message` / `code`. Bodies that are not JSON fall back to the status
/// reason phrase.
pub(crate) fn provider_error(status: StatusCode, body: Option<&Value>) -> ProviderError {
    let message = body
        .and_then(|b| {
            ["msg", "message", "error_description", "error"]
                .iter()
                .find_map(|key| b.get(*key).and_then(Value::as_str))
        })
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
        });

    let code = body.and_then(|b| {
        ["error_code", "code"]
            .iter()
            .find_map(|key| match b.get(*key) {
                Some(Value::String(s)) => Some(s.clone()),
                _ => None,
            })
    });

    let error = ProviderError::new(message).with_status(status.as_u16());
    match code {
        Some(code) => error.with_code(code),
        None => error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_confirmation_pending_body() {
        let body = json!({"id": "u1", "email": "jo@x.com", "confirmation_sent_at": "2024-01-01"});
        let (user, token) = split_signup_body(&body);
        assert_eq!(user.unwrap()["id"], "u1");
        assert!(token.is_none());
    }

    #[test]
    fn test_split_autoconfirm_body() {
        let body = json!({"access_token": "tok", "token_type": "bearer", "user": {"id": "u1"}});
        let (user, token) = split_signup_body(&body);
        assert_eq!(user.unwrap()["id"], "u1");
        assert_eq!(token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_split_nested_session_body() {
        let body = json!({"user": {"id": "u1"}, "session": {"access_token": "tok"}});
        let (_, token) = split_signup_body(&body);
        assert_eq!(token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_split_null_user() {
        let body = json!({"user": null, "session": null});
        let (user, token) = split_signup_body(&body);
        assert!(user.is_none());
        assert!(token.is_none());
    }

    #[test]
    fn test_parse_user_ignores_extra_fields() {
        let user = parse_account_user(&json!({
            "id": "u1",
            "email": "jo@x.com",
            "aud": "authenticated",
            "identities": []
        }))
        .unwrap();
        assert_eq!(user.id.as_str(), "u1");
        assert_eq!(user.email.as_deref(), Some("jo@x.com"));
    }

    #[test]
    fn test_parse_user_without_string_id_is_absent() {
        assert!(parse_account_user(&json!({"email": "jo@x.com"})).is_none());
        assert!(parse_account_user(&json!({"id": 42})).is_none());
    }

    #[test]
    fn test_gotrue_error() {
        let body = json!({"code": 422, "error_code": "user_already_exists", "msg": "User already registered"});
        let error = provider_error(StatusCode::UNPROCESSABLE_ENTITY, Some(&body));
        assert_eq!(error.message, "User already registered");
        assert_eq!(error.status, Some(422));
        assert_eq!(error.code.as_deref(), Some("user_already_exists"));
    }

    #[test]
    fn test_postgrest_error() {
        let body = json!({"code": "42501", "message": "permission denied for table users", "details": null, "hint": null});
        let error = provider_error(StatusCode::FORBIDDEN, Some(&body));
        assert_eq!(error.message, "permission denied for table users");
        assert_eq!(error.code.as_deref(), Some("42501"));
    }

    #[test]
    fn test_non_json_error_uses_reason_phrase() {
        let error = provider_error(StatusCode::BAD_GATEWAY, None);
        assert_eq!(error.message, "Bad Gateway");
        assert_eq!(error.status, Some(502));
        assert!(error.code.is_none());
    }
}
