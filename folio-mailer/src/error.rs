//! Error types for the mailer crate.

/// Errors that can occur while configuring or dispatching mail.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MailerError {
    /// A required environment variable is not set.
    #[error("environment variable {var} is not set")]
    MissingVar { var: &'static str },

    /// An address in the composed email could not be parsed.
    #[error("invalid {field} address: {source}")]
    InvalidAddress {
        field: &'static str,
        #[source]
        source: lettre::address::AddressError,
    },

    /// The message could not be assembled (e.g. invalid header content).
    #[error("message build failed: {0}")]
    Message(#[from] lettre::error::Error),

    /// The SMTP relay could not be reached or rejected the message.
    #[error("smtp dispatch failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
