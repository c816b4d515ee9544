//! Integration tests: the full relay contract over the router.
//!
//! Each test drives the router with `tower::ServiceExt::oneshot` and a
//! recording transport, so every assertion about dispatch counts is
//! exact.

use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use folio_gateway::{
    rate_limit::RateLimiter,
    routes::{create_router, RelayState},
};
use folio_mailer::{MailTransport, MailerError, OutgoingEmail};

const BOUNDARY: &str = "folio-test-boundary";
const API_KEY: &str = "test-relay-key";

/// Counts dispatches; optionally fails every send.
struct CountingTransport {
    dispatched: Arc<AtomicUsize>,
    fail: bool,
}

#[async_trait]
impl MailTransport for CountingTransport {
    async fn send(&self, _email: &OutgoingEmail) -> Result<(), MailerError> {
        if self.fail {
            return Err(MailerError::MissingVar { var: "mock transport failure" });
        }
        self.dispatched.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn test_app(fail_transport: bool, max_requests: u32) -> (Router, Arc<AtomicUsize>) {
    let dispatched = Arc::new(AtomicUsize::new(0));
    let state = Arc::new(RelayState {
        api_key: API_KEY.to_owned(),
        mail_from: "site@example.com".to_owned(),
        mail_to: "inbox@example.com".to_owned(),
        transport: Arc::new(CountingTransport {
            dispatched: dispatched.clone(),
            fail: fail_transport,
        }),
        limiter: RateLimiter::new(Duration::from_secs(900), max_requests),
    });
    (create_router(state), dispatched)
}

fn multipart_body(fields: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body
}

fn contact_request(fields: &[(&str, &str)], client: SocketAddr) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/contact-mail")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .extension(ConnectInfo(client))
        .body(Body::from(multipart_body(fields)))
        .expect("request builds")
}

fn valid_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("api_key", API_KEY),
        ("name", "Jo"),
        ("email", "a@b.com"),
        ("phone_no", "9876543210"),
        ("message", "Hello there, this is a test."),
    ]
}

fn client(last: u8) -> SocketAddr {
    SocketAddr::from(([127, 0, 0, last], 40000))
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[tokio::test]
async fn valid_submission_returns_200_and_dispatches_exactly_once() {
    let (app, dispatched) = test_app(false, 5);
    let resp = app
        .oneshot(contact_request(&valid_fields(), client(1)))
        .await
        .expect("router responds");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Email sent successfully");
    assert_eq!(dispatched.load(Ordering::SeqCst), 1, "exactly one dispatch");
}

#[tokio::test]
async fn invalid_api_key_returns_401_and_dispatches_nothing() {
    let (app, dispatched) = test_app(false, 5);
    let mut fields = valid_fields();
    fields[0] = ("api_key", "wrong-key");

    let resp = app
        .oneshot(contact_request(&fields, client(1)))
        .await
        .expect("router responds");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Invalid API key");
    assert_eq!(dispatched.load(Ordering::SeqCst), 0, "zero dispatches");
}

#[tokio::test]
async fn invalid_key_wins_over_invalid_fields() {
    // The key check runs before field validation.
    let (app, dispatched) = test_app(false, 5);
    let fields = vec![("api_key", "wrong-key")];

    let resp = app
        .oneshot(contact_request(&fields, client(1)))
        .await
        .expect("router responds");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(dispatched.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_message_returns_400() {
    let (app, dispatched) = test_app(false, 5);
    let fields: Vec<_> = valid_fields()
        .into_iter()
        .filter(|(name, _)| *name != "message")
        .collect();

    let resp = app
        .oneshot(contact_request(&fields, client(1)))
        .await
        .expect("router responds");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "All fields are required");
    assert_eq!(dispatched.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn blank_field_counts_as_missing() {
    let (app, _) = test_app(false, 5);
    let mut fields = valid_fields();
    fields[1] = ("name", "   ");

    let resp = app
        .oneshot(contact_request(&fields, client(1)))
        .await
        .expect("router responds");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_email_returns_400_with_format_error() {
    let (app, dispatched) = test_app(false, 5);
    let mut fields = valid_fields();
    fields[2] = ("email", "not-an-email");

    let resp = app
        .oneshot(contact_request(&fields, client(1)))
        .await
        .expect("router responds");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Invalid email format");
    assert_eq!(dispatched.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn transport_failure_returns_500_with_success_false() {
    let (app, dispatched) = test_app(true, 5);
    let resp = app
        .oneshot(contact_request(&valid_fields(), client(1)))
        .await
        .expect("router responds");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Failed to send email");
    assert_eq!(dispatched.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn sixth_submission_in_window_is_rate_limited() {
    let (app, _) = test_app(false, 5);

    for i in 0..5 {
        let resp = app
            .clone()
            .oneshot(contact_request(&valid_fields(), client(9)))
            .await
            .expect("router responds");
        assert_eq!(resp.status(), StatusCode::OK, "request {i} must be admitted");
    }

    let resp = app
        .oneshot(contact_request(&valid_fields(), client(9)))
        .await
        .expect("router responds");
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    let body = body_json(resp).await;
    assert_eq!(
        body["error"],
        "Too many requests from this IP, please try again later."
    );
}

#[tokio::test]
async fn rate_limit_is_per_source_address() {
    let (app, _) = test_app(false, 1);

    let first = app
        .clone()
        .oneshot(contact_request(&valid_fields(), client(10)))
        .await
        .expect("router responds");
    assert_eq!(first.status(), StatusCode::OK);

    let limited = app
        .clone()
        .oneshot(contact_request(&valid_fields(), client(10)))
        .await
        .expect("router responds");
    assert_eq!(limited.status(), StatusCode::TOO_MANY_REQUESTS);

    let other = app
        .oneshot(contact_request(&valid_fields(), client(11)))
        .await
        .expect("router responds");
    assert_eq!(other.status(), StatusCode::OK, "other IPs keep their own window");
}

#[tokio::test]
async fn health_is_not_rate_limited() {
    let (app, _) = test_app(false, 1);

    // Exhaust the contact window first.
    let _ = app
        .clone()
        .oneshot(contact_request(&valid_fields(), client(12)))
        .await
        .expect("router responds");

    for _ in 0..3 {
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .expect("request builds");
        let resp = app.clone().oneshot(req).await.expect("router responds");
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
