//! Mail transport abstraction trait.
//!
//! Allows the gateway to depend on "something that delivers mail"
//! without knowing about SMTP, so tests can substitute a recording
//! mock and count dispatches.

use async_trait::async_trait;

use crate::{MailerError, OutgoingEmail};

/// Delivers a composed email to its recipient.
///
/// Implementations must be `Send + Sync` to allow sharing across
/// request handlers. Dispatch is single-shot: the caller never retries.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Deliver one email.
    ///
    /// # Errors
    /// Returns [`MailerError::Smtp`] if the relay cannot be reached or
    /// rejects the message, [`MailerError::InvalidAddress`] or
    /// [`MailerError::Message`] if the composed email cannot be turned
    /// into a valid wire message.
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError>;
}
