use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Echo of a freshly created account.
///
/// The registration route answers with the submitted account fields; the
/// password hash the server includes is deliberately not modeled here and
/// is dropped during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisteredUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Identity snapshot of the signed-in user, as returned by `/user/me`.
///
/// Replaced wholesale on every refresh, never mutated field by field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserProfile {
    /// Display name for headers and greetings.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Generic `{"message": ...}` acknowledgement (login, logout, wallet update)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body: FastAPI-style `{"detail": ...}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_profile_ignores_extra_fields() {
        // /user/me returns the full server-side record; the client only
        // models the identity subset.
        let body = r#"{
            "id": 7,
            "username": "alice",
            "email": "alice@example.com",
            "first_name": "Alice",
            "last_name": "Doe",
            "wallet_balance": 1250.5,
            "password": "$2b$..."
        }"#;
        let profile: UserProfile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.display_name(), "Alice Doe");
    }

    #[test]
    fn test_error_detail_round_trip() {
        let body = r#"{"detail": "Invalid username or password"}"#;
        let err: ErrorDetail = serde_json::from_str(body).unwrap();
        assert_eq!(err.detail, "Invalid username or password");
    }
}
