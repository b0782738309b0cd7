//! The `{ success, message, data, error }` wrapper every response uses.
//!
//! Successful responses carry the payload under `data`. Error responses
//! usually leave `data` out and put text in `error` and/or `message`.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    /// `message` is the user-facing text; `error` only fills in when it is blank.
    fn into_message(self) -> Option<String> {
        non_blank(self.message).or_else(|| non_blank(self.error))
    }
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

/// Best-effort extraction of a server message from an error body.
pub fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
}

/// Unwrap a 2xx body down to its `data` payload.
pub fn into_data<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, ApiError> {
    let envelope: Envelope<T> = serde_json::from_slice(body)?;

    if envelope.success == Some(false) {
        let message = non_blank(envelope.message).or_else(|| non_blank(envelope.error));
        return Err(ApiError::Server { status, message });
    }

    envelope.data.ok_or(ApiError::MissingData)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_is_unwrapped() {
        let body = br#"{"success":true,"message":"ok","data":[1,2,3]}"#;
        let data: Vec<u32> = into_data(200, body).unwrap();
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn missing_data_is_an_error() {
        let body = br#"{"success":true,"message":"ok"}"#;
        let err = into_data::<Vec<u32>>(200, body).unwrap_err();
        assert!(matches!(err, ApiError::MissingData));
    }

    #[test]
    fn success_false_becomes_server_error() {
        let body = br#"{"success":false,"message":"","error":"bad lawdCode"}"#;
        let err = into_data::<Vec<u32>>(200, body).unwrap_err();
        match err {
            ApiError::Server { status, message } => {
                assert_eq!(status, 200);
                assert_eq!(message.as_deref(), Some("bad lawdCode"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_message_prefers_message_field() {
        assert_eq!(
            error_message(
                br#"{"success":false,"message":"DB unavailable","error":"java.sql.SQLException"}"#
            )
            .as_deref(),
            Some("DB unavailable")
        );
        assert_eq!(
            error_message(br#"{"message":" ","error":"DB down"}"#).as_deref(),
            Some("DB down")
        );
        assert_eq!(
            error_message(br#"{"message":"DB unavailable"}"#).as_deref(),
            Some("DB unavailable")
        );
        assert_eq!(error_message(br#"{"message":"","error":" "}"#), None);
        assert_eq!(error_message(b"<html>502</html>"), None);
    }
}
