//! User Models

use serde::{Deserialize, Serialize};

/// Id carried by the response substituted for any failed call.
pub const FALLBACK_USER_ID: i32 = -1;

/// A user record as returned by the Users service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UserResponse {
    /// The sentinel returned when the Users service could not be reached.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            id: FALLBACK_USER_ID,
            name: None,
            last_name: None,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.id == FALLBACK_USER_ID
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn fallback_is_recognised() {
        assert!(UserResponse::fallback().is_fallback());
    }

    #[test]
    fn deserialises_camel_case_body() -> TestResult {
        let user: UserResponse =
            serde_json::from_str(r#"{"id":4,"name":"Ada","lastName":"Lovelace"}"#)?;

        assert_eq!(user.id, 4);
        assert_eq!(user.last_name.as_deref(), Some("Lovelace"));
        assert!(!user.is_fallback());

        Ok(())
    }
}
