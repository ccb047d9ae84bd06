//! Request and response types for the signup and login endpoints. The backend
//! answers both with an optional session token plus the user's full name.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Shared shape of signup and login responses. `token` is absent when the
/// backend declines to open a session (e.g. signup pending verification);
/// callers must then leave any previously stored token untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_token_is_optional() {
        let with_token: AuthResponse =
            serde_json::from_str(r#"{"token": "session-a@b.c", "full_name": "Ada L"}"#)
                .expect("decode");
        assert_eq!(with_token.token.as_deref(), Some("session-a@b.c"));

        let without: AuthResponse =
            serde_json::from_str(r#"{"message": "Signup successful"}"#).expect("decode");
        assert!(without.token.is_none());
        assert_eq!(without.message.as_deref(), Some("Signup successful"));
    }

    #[test]
    fn signup_request_wire_names() {
        let request = SignupRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "difference-engine".to_string(),
        };
        let json = serde_json::to_value(&request).expect("encode");
        assert_eq!(json["first_name"], "Ada");
        assert_eq!(json["last_name"], "Lovelace");
    }
}
