//! Wire formats of the Gathering backend and the decoding shared by every transport.
//!
//! The backend is inconsistent about framing: some endpoints answer with a bare value, others
//! wrap it in an [`ApiResponse`] envelope. The helpers here accept both so the transports only
//! have to hand over a status code and a body.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Envelope the backend wraps most of its responses in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// Result of exchanging a Kakao authorization code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    /// Path (or URL) to send the browser to, resolved against the page origin
    pub redirect_url: Option<String>,
    /// Session token issued by the backend, possibly carrying a `Bearer ` prefix
    pub bearer_token: Option<String>,
    /// Chat endpoint the backend hands out with every login; the pages here have no chat
    pub websocket_url: Option<String>,
}

/// Turn a non-success status into [`Error::StatusError`].
pub fn check_status(status: u16, body: &str) -> Result<(), Error> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    Err(Error::StatusError {
        status,
        message: error_message(body),
    })
}

/// Best-effort human readable message out of an error body.
pub fn error_message(body: &str) -> String {
    if let Ok(error_dto) = serde_json::from_str::<ErrorDto>(body) {
        return error_dto.error;
    }

    if let Ok(envelope) = serde_json::from_str::<ApiResponse<Value>>(body) {
        if !envelope.message.is_empty() {
            return envelope.message;
        }
    }

    let body = body.trim();
    if body.is_empty() {
        "Unknown error".to_string()
    } else {
        body.to_string()
    }
}

/// Decode a JSON body that may or may not be wrapped in an [`ApiResponse`].
pub fn decode_enveloped<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| Error::ParseError(e.to_string()))?;

    let inner = match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };

    serde_json::from_value(inner).map_err(|e| Error::ParseError(e.to_string()))
}

/// Decode the body of the authorization URL endpoint.
///
/// Accepts plain text, a JSON string, or an envelope whose `data` is the URL.
pub fn decode_authorization_url(body: &str) -> Result<String, Error> {
    let trimmed = body.trim();

    let url = if trimmed.starts_with('"') || trimmed.starts_with('{') {
        decode_enveloped::<String>(trimmed)?
    } else {
        trimmed.to_string()
    };

    if url.is_empty() {
        return Err(Error::ParseError(
            "Authorization URL response was empty".to_string(),
        ));
    }

    Ok(url)
}
