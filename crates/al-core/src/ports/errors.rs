use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error reported by the provider inside an otherwise well-formed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub message: String,
    /// HTTP status, when the provider answered over HTTP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Provider-specific error code (e.g. `user_already_exists`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            code: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Failure of the account-creation call itself.
#[derive(Debug, Error)]
pub enum AuthProviderError {
    /// The request never produced a response (connect, timeout, I/O).
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with something that is not a response object.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display_is_message() {
        let err = ProviderError::new("User already registered")
            .with_status(422)
            .with_code("user_already_exists");
        assert_eq!(err.to_string(), "User already registered");
        assert_eq!(err.status, Some(422));
        assert_eq!(err.code.as_deref(), Some("user_already_exists"));
    }
}
