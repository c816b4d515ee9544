//! Outbound mail for the folio contact relay.
//!
//! Composes the fixed notification template from a validated submission
//! and dispatches it through an injected [`MailTransport`]. The only
//! production transport is SMTP; tests substitute a recording mock.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod message;
pub mod smtp;
pub mod transport;

pub use config::MailerConfig;
pub use error::MailerError;
pub use message::{compose, OutgoingEmail};
pub use smtp::SmtpMailer;
pub use transport::MailTransport;
