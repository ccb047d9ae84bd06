use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid json")]
    Json(#[from] serde_json::Error),
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
}

/// Extracts the user-facing message from a non-2xx response body.
///
/// The backend reports failures as `{"detail": "..."}`. When the body is not
/// JSON, carries no `detail` string, or the string is blank, the caller's
/// fixed fallback is used instead.
#[must_use]
pub fn detail_or(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(serde_json::Value::as_str)
                .map(str::trim)
                .filter(|detail| !detail.is_empty())
                .map(ToString::to_string)
        })
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::detail_or;

    #[test]
    fn uses_detail_when_present() {
        let body = r#"{"detail": "User already exists"}"#;
        assert_eq!(detail_or(body, "Signup failed"), "User already exists");
    }

    #[test]
    fn falls_back_on_missing_detail() {
        assert_eq!(detail_or(r#"{"error": "nope"}"#, "Signup failed"), "Signup failed");
        assert_eq!(detail_or("{}", "Login failed"), "Login failed");
    }

    #[test]
    fn falls_back_on_malformed_body() {
        assert_eq!(detail_or("<html>502</html>", "Server error"), "Server error");
        assert_eq!(detail_or("", "Server error"), "Server error");
    }

    #[test]
    fn falls_back_on_non_string_or_blank_detail() {
        assert_eq!(detail_or(r#"{"detail": 42}"#, "Tailor failed"), "Tailor failed");
        assert_eq!(detail_or(r#"{"detail": "   "}"#, "Tailor failed"), "Tailor failed");
    }
}
