//! Error types for the gateway crate.

use axum::{
    http::{header::RETRY_AFTER, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use folio_mailer::MailerError;

/// Errors that can occur during relay request handling.
///
/// The `Display` strings double as the client-visible `error` field, so
/// they match the wire contract verbatim.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The submitted `api_key` does not match the configured secret.
    #[error("Invalid API key")]
    InvalidApiKey,

    /// One or more of the four required form fields is absent or empty.
    #[error("All fields are required")]
    MissingFields,

    /// The email field does not match the shared email pattern.
    #[error("Invalid email format")]
    InvalidEmail,

    /// The client exceeded the per-IP submission window.
    #[error("Too many requests from this IP, please try again later.")]
    RateLimited { retry_after_secs: u64 },

    /// The multipart body could not be read.
    #[error("malformed form data: {0}")]
    Malformed(String),

    /// Mail dispatch failed; the submission is lost (no retries).
    #[error("Failed to send email")]
    Transport(#[source] MailerError),
}

/// Errors raised while assembling the gateway configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("environment variable {var} is not set")]
    MissingVar { var: &'static str },

    /// An environment variable is set but cannot be parsed.
    #[error("environment variable {var} is invalid: {reason}")]
    InvalidVar { var: &'static str, reason: String },

    /// The mailer portion of the configuration is incomplete.
    #[error(transparent)]
    Mailer(#[from] MailerError),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match &self {
            GatewayError::InvalidApiKey => {
                (StatusCode::UNAUTHORIZED, Json(json!({"error": self.to_string()})))
                    .into_response()
            }
            GatewayError::MissingFields
            | GatewayError::InvalidEmail
            | GatewayError::Malformed(_) => {
                (StatusCode::BAD_REQUEST, Json(json!({"error": self.to_string()})))
                    .into_response()
            }
            GatewayError::RateLimited { retry_after_secs } => (
                StatusCode::TOO_MANY_REQUESTS,
                [(RETRY_AFTER, retry_after_secs.to_string())],
                Json(json!({"error": self.to_string()})),
            )
                .into_response(),
            GatewayError::Transport(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"success": false, "error": self.to_string()})),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_error_status_codes_map_correctly() {
        assert_eq!(
            GatewayError::InvalidApiKey.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            GatewayError::MissingFields.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::InvalidEmail.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::RateLimited { retry_after_secs: 60 }
                .into_response()
                .status(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[test]
    fn rate_limited_response_carries_retry_after_header() {
        let resp = GatewayError::RateLimited { retry_after_secs: 120 }.into_response();
        let header = resp
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned);
        assert_eq!(header.as_deref(), Some("120"));
    }

    #[test]
    fn error_display_matches_wire_contract() {
        assert_eq!(GatewayError::InvalidApiKey.to_string(), "Invalid API key");
        assert_eq!(GatewayError::MissingFields.to_string(), "All fields are required");
        assert_eq!(GatewayError::InvalidEmail.to_string(), "Invalid email format");
    }
}
