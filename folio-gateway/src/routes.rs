//! Axum route handlers for the folio submission relay.

use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use axum::{
    extract::{ConnectInfo, Multipart, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use folio_core::{is_valid_email, ContactSubmission};
use folio_mailer::{compose, MailTransport};

use crate::{error::GatewayError, rate_limit::RateLimiter};

// ── Shared state ─────────────────────────────────────────────────────────────

/// Per-process relay state; cheap to clone behind an [`Arc`].
pub struct RelayState {
    /// Static shared secret expected in the `api_key` form field.
    pub api_key: String,
    /// Sender address for outgoing notifications.
    pub mail_from: String,
    /// Fixed recipient inbox.
    pub mail_to: String,
    /// Injected mail transport.
    pub transport: Arc<dyn MailTransport>,
    /// Fixed-window limiter for the contact route.
    pub limiter: RateLimiter,
}

type Relay = Arc<RelayState>;

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router with the given relay state.
///
/// The rate limiter guards only the contact route; `/health` is always
/// reachable.
pub fn create_router(state: Relay) -> Router {
    Router::new()
        .route("/v1/contact-mail", post(contact_mail))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            enforce_rate_limit,
        ))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Middleware ────────────────────────────────────────────────────────────────

/// Per-IP fixed-window admission check for the contact route.
async fn enforce_rate_limit(
    State(state): State<Relay>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: axum::extract::Request,
    next: Next,
) -> Result<Response, GatewayError> {
    state.limiter.check(addr.ip()).map_err(|e| {
        tracing::warn!(ip = %addr.ip(), retry_after_secs = e.retry_after_secs, "rate limited");
        GatewayError::RateLimited { retry_after_secs: e.retry_after_secs }
    })?;
    Ok(next.run(request).await)
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({"status": "OK", "service": "portfolio-backend"})),
    )
}

/// `POST /v1/contact-mail` — authenticate a form post and forward it as
/// an email.
///
/// The key check runs before field validation, so an invalid key yields
/// 401 regardless of field validity.
///
/// # Errors
/// Returns [`GatewayError::InvalidApiKey`] (401), then
/// [`GatewayError::MissingFields`] or [`GatewayError::InvalidEmail`]
/// (400), then [`GatewayError::Transport`] (500) if dispatch fails.
pub async fn contact_mail(
    State(state): State<Relay>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, GatewayError> {
    let form = read_form(&mut multipart).await?;

    let api_key = form.get("api_key").map(String::as_str).unwrap_or_default();
    if api_key != state.api_key {
        tracing::warn!("contact submission with invalid api key");
        return Err(GatewayError::InvalidApiKey);
    }

    let (Some(name), Some(email), Some(message), Some(phone_no)) = (
        nonempty(&form, "name"),
        nonempty(&form, "email"),
        nonempty(&form, "message"),
        nonempty(&form, "phone_no"),
    ) else {
        return Err(GatewayError::MissingFields);
    };

    if !is_valid_email(email) {
        return Err(GatewayError::InvalidEmail);
    }

    let submission = ContactSubmission::from_parts(name, email, phone_no, message);
    let outgoing = compose(&submission, &state.mail_from, &state.mail_to);

    state.transport.send(&outgoing).await.map_err(|e| {
        tracing::error!(submission = %submission.id, error = %e, "mail dispatch failed");
        GatewayError::Transport(e)
    })?;

    tracing::info!(
        submission = %submission.id,
        name = %submission.name,
        email = %submission.email,
        "contact form submission relayed"
    );

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({"success": true, "message": "Email sent successfully"})),
    ))
}

// ── Form helpers ──────────────────────────────────────────────────────────────

/// Drain every text part of the multipart body into a field map.
async fn read_form(multipart: &mut Multipart) -> Result<HashMap<String, String>, GatewayError> {
    let mut fields = HashMap::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GatewayError::Malformed(e.to_string()))?
    {
        let Some(name) = field.name().map(ToOwned::to_owned) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| GatewayError::Malformed(e.to_string()))?;
        fields.insert(name, value);
    }
    Ok(fields)
}

/// Returns the trimmed field value unless it is absent or blank.
fn nonempty<'a>(form: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    form.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use async_trait::async_trait;
    use folio_mailer::{MailerError, OutgoingEmail};

    struct NullTransport;

    #[async_trait]
    impl MailTransport for NullTransport {
        async fn send(&self, _email: &OutgoingEmail) -> Result<(), MailerError> {
            Ok(())
        }
    }

    fn test_state() -> Relay {
        Arc::new(RelayState {
            api_key: "test-key".to_owned(),
            mail_from: "site@example.com".to_owned(),
            mail_to: "inbox@example.com".to_owned(),
            transport: Arc::new(NullTransport),
            limiter: RateLimiter::new(std::time::Duration::from_secs(900), 5),
        })
    }

    #[tokio::test]
    async fn health_reports_ok_and_service_name() {
        let app = create_router(test_state());
        let req = match Request::builder().uri("/health").body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let resp = match app.oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = match axum::body::to_bytes(resp.into_body(), 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        let body: serde_json::Value = match serde_json::from_slice(&bytes) {
            Ok(v) => v,
            Err(e) => panic!("invalid JSON: {e}"),
        };
        assert_eq!(body["status"], "OK");
        assert_eq!(body["service"], "portfolio-backend");
    }

    #[test]
    fn nonempty_filters_blank_and_missing_values() {
        let mut form = HashMap::new();
        form.insert("name".to_owned(), "  Jo  ".to_owned());
        form.insert("email".to_owned(), "   ".to_owned());
        assert_eq!(nonempty(&form, "name"), Some("Jo"));
        assert_eq!(nonempty(&form, "email"), None, "blank value counts as missing");
        assert_eq!(nonempty(&form, "message"), None, "absent key counts as missing");
    }
}
