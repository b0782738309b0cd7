use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection refused, DNS, TLS, body read failures...
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status, or an envelope flagged `success: false`.
    #[error("Server error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },

    #[error("Invalid API response: {0}")]
    Decode(String),

    #[error("Invalid API response: envelope has no data")]
    MissingData,

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// The text worth showing a user, if this error has one.
    ///
    /// Server errors only count when the server actually said something;
    /// otherwise the caller falls back to its own wording.
    pub fn user_message(&self) -> Option<String> {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            other => Some(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_without_message_has_no_user_message() {
        let err = ApiError::Server {
            status: 502,
            message: None,
        };
        assert_eq!(err.user_message(), None);
        assert_eq!(err.to_string(), "Server error 502: no message");
    }

    #[test]
    fn server_message_is_passed_through() {
        let err = ApiError::Server {
            status: 500,
            message: Some("DB unavailable".to_string()),
        };
        assert_eq!(err.user_message().as_deref(), Some("DB unavailable"));
    }

    #[test]
    fn decode_errors_describe_themselves() {
        let err = ApiError::from(serde_json::from_str::<u32>("nope").unwrap_err());
        let msg = err.user_message().unwrap();
        assert!(msg.starts_with("Invalid API response"));
    }
}
