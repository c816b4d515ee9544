//! HTTP client that relays a submission to the gateway.
//!
//! The form posts as `multipart/form-data`, so the body is assembled
//! locally with a per-submission boundary and sent over a plain TCP
//! connection using hyper's low-level client.

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request};
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use folio_core::ContactSubmission;

use crate::error::SiteError;

/// Posts contact submissions to a folio gateway.
#[derive(Debug, Clone)]
pub struct RelayClient {
    /// Gateway address, `host:port`.
    addr: String,
    /// Static shared secret sent in the `api_key` field.
    api_key: String,
}

impl RelayClient {
    /// Creates a client for the gateway at `addr` (`host:port`).
    #[must_use]
    pub fn new(addr: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { addr: addr.into(), api_key: api_key.into() }
    }

    /// Relays one submission to `POST /v1/contact-mail`.
    ///
    /// # Errors
    /// Returns [`SiteError::Connect`] if the gateway is unreachable,
    /// [`SiteError::Http`] on a failed exchange, and
    /// [`SiteError::Rejected`] when the gateway answers non-2xx.
    pub async fn submit(&self, submission: &ContactSubmission) -> Result<(), SiteError> {
        // The submission id is a UUID, so the boundary cannot collide
        // with field content.
        let boundary = format!("folio-{}", submission.id);
        let body = encode_form(
            &boundary,
            &[
                ("api_key", &self.api_key),
                ("name", &submission.name),
                ("email", &submission.email),
                ("message", &submission.message),
                ("phone_no", &submission.phone_no),
            ],
        );

        let stream = TcpStream::connect(&self.addr).await.map_err(|source| {
            SiteError::Connect { addr: self.addr.clone(), source }
        })?;
        let io = TokioIo::new(stream);

        let (mut sender, conn) = hyper::client::conn::http1::handshake(io)
            .await
            .map_err(|e| SiteError::Http(format!("HTTP handshake: {e}")))?;

        // Drive the connection in the background.
        tokio::spawn(async move {
            if let Err(e) = conn.await {
                tracing::debug!("relay connection closed: {e}");
            }
        });

        let body_bytes = Bytes::from(body);
        let request = Request::builder()
            .method(Method::POST)
            .uri("/v1/contact-mail")
            .header("Host", self.addr.clone())
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .header("Content-Length", body_bytes.len().to_string())
            .body(Full::new(body_bytes))
            .map_err(|e| SiteError::Http(format!("build request: {e}")))?;

        let response = sender
            .send_request(request)
            .await
            .map_err(|e| SiteError::Http(format!("send request: {e}")))?;

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| SiteError::Http(format!("read response body: {e}")))?
            .to_bytes();

        if !status.is_success() {
            return Err(SiteError::Rejected {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        tracing::info!(submission = %submission.id, "submission relayed");
        Ok(())
    }
}

/// Assemble a `multipart/form-data` body from text fields.
fn encode_form(boundary: &str, fields: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{boundary}--\r\n"));
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_form_contains_every_field_and_closes_the_boundary() {
        let body = encode_form(
            "test-boundary",
            &[("api_key", "k"), ("name", "Jo"), ("email", "a@b.com")],
        );
        assert!(body.contains("name=\"api_key\"\r\n\r\nk\r\n"));
        assert!(body.contains("name=\"name\"\r\n\r\nJo\r\n"));
        assert!(body.contains("name=\"email\"\r\n\r\na@b.com\r\n"));
        assert!(body.ends_with("--test-boundary--\r\n"));
    }

    #[test]
    fn each_part_opens_with_the_boundary_delimiter() {
        let body = encode_form("b1", &[("x", "1"), ("y", "2")]);
        assert_eq!(body.matches("--b1\r\n").count(), 2);
        assert_eq!(body.matches("--b1--\r\n").count(), 1);
    }
}
