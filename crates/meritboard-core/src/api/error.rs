use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-success status. `message` is the
    /// server-supplied message when present, else the HTTP status line.
    #[error("{message}")]
    Request { status: StatusCode, message: String },

    /// No usable response at all (DNS, connect, timeout, TLS).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A success-status body that could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for response excerpts carried in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Error responses carry at least `success: false` and usually a `message`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl ApiError {
    /// Build a request failure from a non-success response body, preferring
    /// the server's own `message` over the synthesized status line.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| Self::status_line(status));
        ApiError::Request { status, message }
    }

    /// `HTTP <status>: <statusText>`
    pub fn status_line(status: StatusCode) -> String {
        format!(
            "HTTP {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown Status")
        )
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Request { status, .. } if *status == StatusCode::UNAUTHORIZED)
    }

    /// Truncate a response body to avoid carrying excessive data in errors
    pub(crate) fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let truncated: String = body.chars().take(MAX_ERROR_BODY_LENGTH).collect();
            format!("{}... (truncated, {} total bytes)", truncated, body.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_prefers_server_message() {
        let error = ApiError::from_response(
            StatusCode::UNAUTHORIZED,
            r#"{"success":false,"message":"Invalid credentials"}"#,
        );
        assert_eq!(error.to_string(), "Invalid credentials");
        assert!(error.is_unauthorized());
    }

    #[test]
    fn test_from_response_synthesizes_status_line() {
        // Non-JSON body
        let error = ApiError::from_response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert_eq!(error.to_string(), "HTTP 502: Bad Gateway");

        // JSON body without a message field
        let error = ApiError::from_response(StatusCode::NOT_FOUND, r#"{"success":false}"#);
        assert_eq!(error.to_string(), "HTTP 404: Not Found");

        // Empty message falls through to the status line
        let error =
            ApiError::from_response(StatusCode::FORBIDDEN, r#"{"success":false,"message":""}"#);
        assert_eq!(error.to_string(), "HTTP 403: Forbidden");
    }

    #[test]
    fn test_truncate_body() {
        let short = "short body";
        assert_eq!(ApiError::truncate_body(short), short);

        let long = "x".repeat(600);
        let truncated = ApiError::truncate_body(&long);
        assert!(truncated.starts_with(&"x".repeat(500)));
        assert!(truncated.ends_with("(truncated, 600 total bytes)"));
    }
}
