//! Error types for the site crate.

/// Errors that can occur while relaying a submission to the gateway.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SiteError {
    /// The gateway address could not be reached.
    #[error("connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP exchange itself failed (handshake, send, or read).
    #[error("relay request failed: {0}")]
    Http(String),

    /// The gateway answered with a non-success status.
    #[error("relay rejected submission: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}
