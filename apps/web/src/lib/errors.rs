use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Caught client-side before any network call (empty field, short
    /// password, blank résumé).
    Validation(String),
    Network(String),
    Timeout(String),
    /// Non-2xx response; `message` carries the backend `detail` string or
    /// the operation's fixed fallback.
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// The text pages render. For HTTP failures this is exactly the
    /// detail-or-fallback message without status decoration.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message)
            | Self::Network(message)
            | Self::Timeout(message)
            | Self::Parse(message)
            | Self::Serialization(message) => message.clone(),
            Self::Http { message, .. } => message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(message) => write!(formatter, "{message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => write!(formatter, "Request error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn every_variant_carries_its_message() {
        let cases = [
            AppError::Validation("bad input".to_string()),
            AppError::Network("No window available.".to_string()),
            AppError::Timeout("too slow".to_string()),
            AppError::Parse("bad json".to_string()),
            AppError::Serialization("Failed to build form data.".to_string()),
        ];
        for case in cases {
            assert!(!case.user_message().is_empty());
        }
    }

    #[test]
    fn http_message_is_undecorated() {
        let err = AppError::Http {
            status: 422,
            message: "Resume text is required".to_string(),
        };
        assert_eq!(err.user_message(), "Resume text is required");
        assert_eq!(err.to_string(), "Request failed (422): Resume text is required");
    }
}
