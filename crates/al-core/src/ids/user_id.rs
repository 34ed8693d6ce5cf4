use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identifier of an account created by the auth provider.
///
/// The value is opaque to the signup flow; it is only carried from the
/// account-creation response into the profile update.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_display_is_raw_value() {
        let id = UserId::new("8f14e45f-ceea-467f-a0e6-7b2f1c9d0a11");
        assert_eq!(format!("{}", id), "8f14e45f-ceea-467f-a0e6-7b2f1c9d0a11");
    }

    #[test]
    fn test_user_id_serializes_as_plain_string() {
        let id = UserId::from("u1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"u1\"");
        let back: UserId = serde_json::from_str("\"u1\"").unwrap();
        assert_eq!(back, id);
    }
}
