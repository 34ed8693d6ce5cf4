//! Terminal results of a signup attempt and the user-facing alerts derived
//! from them.

use crate::ids::UserId;
use crate::signup::form::SignupValidationError;

pub const SUCCESS_TITLE: &str = "Success";
pub const SUCCESS_MESSAGE: &str =
    "Account created successfully! Please check your email to confirm your account.";
pub const VALIDATION_TITLE: &str = "Validation Error";
pub const VALIDATION_MESSAGE: &str =
    "Please fill in all required fields including your full name.";
pub const ERROR_TITLE: &str = "Signup Error";
pub const REMOTE_AUTH_FALLBACK: &str = "An error occurred.";
pub const UNEXPECTED_FALLBACK: &str = "An unexpected error occurred.";

/// Message used when the account-creation call itself fails.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Unexpected error during sign-up";
/// Message used when the provider answers with an unusable shape.
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Malformed response from account provider.";

/// Outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Account created and profile updated.
    Success(UserId),
    /// Rejected locally, no network call was made.
    ValidationFailed(SignupValidationError),
    /// Provider refused to create the account.
    RemoteAuthError(String),
    /// Account exists but the profile row could not be updated.
    ProfileUpdateError(String),
    /// Transport failure or unusable provider response.
    UnexpectedError(String),
}

impl SignupOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SignupOutcome::Success(_))
    }

    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            SignupOutcome::Success(id) => Some(id),
            _ => None,
        }
    }

    /// Short machine-friendly name, used as a tracing field.
    pub fn kind(&self) -> &'static str {
        match self {
            SignupOutcome::Success(_) => "success",
            SignupOutcome::ValidationFailed(_) => "validation_failed",
            SignupOutcome::RemoteAuthError(_) => "remote_auth_error",
            SignupOutcome::ProfileUpdateError(_) => "profile_update_error",
            SignupOutcome::UnexpectedError(_) => "unexpected_error",
        }
    }

    /// The single alert shown to the user for this outcome.
    pub fn alert(&self) -> Alert {
        match self {
            SignupOutcome::Success(_) => Alert::new(SUCCESS_TITLE, SUCCESS_MESSAGE),
            SignupOutcome::ValidationFailed(_) => Alert::new(VALIDATION_TITLE, VALIDATION_MESSAGE),
            SignupOutcome::RemoteAuthError(message) => {
                Alert::new(ERROR_TITLE, non_empty_or(message, REMOTE_AUTH_FALLBACK))
            }
            SignupOutcome::ProfileUpdateError(message)
            | SignupOutcome::UnexpectedError(message) => {
                Alert::new(ERROR_TITLE, non_empty_or(message, UNEXPECTED_FALLBACK))
            }
        }
    }
}

fn non_empty_or<'a>(message: &'a str, fallback: &'a str) -> &'a str {
    if message.is_empty() {
        fallback
    } else {
        message
    }
}

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signup::FormField;

    #[test]
    fn test_success_alert() {
        let alert = SignupOutcome::Success(UserId::from("u1")).alert();
        assert_eq!(alert.title, "Success");
        assert_eq!(alert.message, SUCCESS_MESSAGE);
    }

    #[test]
    fn test_validation_alert_ignores_field_details() {
        let outcome = SignupOutcome::ValidationFailed(SignupValidationError::MissingFields(vec![
            FormField::Email,
        ]));
        assert_eq!(
            outcome.alert(),
            Alert::new("Validation Error", VALIDATION_MESSAGE)
        );
    }

    #[test]
    fn test_remote_auth_alert_carries_provider_message() {
        let outcome = SignupOutcome::RemoteAuthError("User already registered".to_string());
        assert_eq!(
            outcome.alert(),
            Alert::new("Signup Error", "User already registered")
        );
    }

    #[test]
    fn test_empty_messages_fall_back() {
        assert_eq!(
            SignupOutcome::RemoteAuthError(String::new()).alert().message,
            REMOTE_AUTH_FALLBACK
        );
        assert_eq!(
            SignupOutcome::ProfileUpdateError(String::new()).alert().message,
            UNEXPECTED_FALLBACK
        );
        assert_eq!(
            SignupOutcome::UnexpectedError(String::new()).alert().message,
            UNEXPECTED_FALLBACK
        );
    }

    #[test]
    fn test_whitespace_message_is_shown_verbatim() {
        assert_eq!(
            SignupOutcome::RemoteAuthError("  ".to_string()).alert().message,
            "  "
        );
        assert_eq!(
            SignupOutcome::ProfileUpdateError(" ".to_string()).alert().message,
            " "
        );
    }

    #[test]
    fn test_user_id_only_on_success() {
        assert_eq!(
            SignupOutcome::Success(UserId::from("u1")).user_id(),
            Some(&UserId::from("u1"))
        );
        assert!(SignupOutcome::UnexpectedError("x".into()).user_id().is_none());
    }
}
