//! Error type shared by every API call.

use reqwest::StatusCode;
use thiserror::Error;

use super::response::Response;

/// Errors returned by the API client.
///
/// Whenever an HTTP response was actually received, the error carries its
/// [`Response`] metadata so callers can still inspect status, pagination and
/// rate-limit headers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A caller-supplied argument was rejected before any network call.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The request could not be built (URL, body or query serialization).
    #[error("Failed to build request: {0}")]
    RequestConstruction(String),

    /// Connection-level failure (DNS, TLS, timeout, reset).
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
        response: Option<Box<Response>>,
    },

    /// The server answered with a non-success status.
    #[error("{}", describe_remote(.response, .message))]
    Remote {
        response: Box<Response>,
        message: String,
    },

    /// The response body did not match the expected JSON shape.
    #[error("Failed to parse JSON response from {}: {source}", .response.url)]
    Decode {
        response: Box<Response>,
        #[source]
        source: serde_json::Error,
    },
}

fn describe_remote(response: &Response, message: &str) -> String {
    let status = response.status.as_u16();
    if message.is_empty() {
        format!("{} {}: {}", response.method, response.url, status)
    } else {
        format!("{} {}: {} {}", response.method, response.url, status, message)
    }
}

impl ApiError {
    /// Response metadata received before the failure, if any.
    pub fn response(&self) -> Option<&Response> {
        match self {
            ApiError::Transport { response, .. } => response.as_deref(),
            ApiError::Remote { response, .. } | ApiError::Decode { response, .. } => {
                Some(response.as_ref())
            }
            ApiError::InvalidArgument(_) | ApiError::RequestConstruction(_) => None,
        }
    }

    /// HTTP status of the received response, if any.
    pub fn status(&self) -> Option<StatusCode> {
        self.response().map(|r| r.status)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApiError::Remote { response, .. } if response.status == StatusCode::NOT_FOUND
        )
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ApiError::InvalidArgument(_))
    }

    /// Whether the server rejected the call because of its rate limit.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            ApiError::Remote { response, .. } => {
                response.status == StatusCode::TOO_MANY_REQUESTS
                    || (response.status == StatusCode::FORBIDDEN
                        && response.rate_limit.remaining == Some(0))
            }
            _ => false,
        }
    }
}

/// Extracts the server's error message from a GitLab error body.
///
/// GitLab reports errors as `{"message": ...}` (a string, a list or a map of
/// field errors) or `{"error": "..."}`. Anything else is returned verbatim.
pub(crate) fn parse_error_message(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body).trim().to_string();

    let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) else {
        return text;
    };

    let field = value.get("message").or_else(|| value.get("error"));
    match field {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .map(flatten_message)
            .collect::<Vec<_>>()
            .join(", "),
        Some(serde_json::Value::Object(map)) => {
            let mut parts: Vec<String> = map
                .iter()
                .map(|(key, v)| format!("{}: {}", key, flatten_message(v)))
                .collect();
            parts.sort();
            format!("{{{}}}", parts.join(", "))
        }
        Some(other) => other.to_string(),
        None => text,
    }
}

fn flatten_message(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => format!(
            "[{}]",
            items
                .iter()
                .map(flatten_message)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        other => other.to_string(),
    }
}
