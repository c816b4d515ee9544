//! SMTP implementation of [`MailTransport`] backed by `lettre`.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::{MailTransport, MailerConfig, MailerError, OutgoingEmail};

/// Dispatches mail through an authenticated STARTTLS SMTP relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Builds a mailer for the configured relay and credentials.
    ///
    /// No connection is opened here; lettre connects lazily on the
    /// first send.
    ///
    /// # Errors
    /// Returns [`MailerError::Smtp`] if the relay hostname is invalid.
    pub fn new(config: &MailerConfig) -> Result<Self, MailerError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .credentials(Credentials::new(
                config.smtp_user.clone(),
                config.smtp_pass.clone(),
            ))
            .build();
        Ok(Self { transport })
    }
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer").finish_non_exhaustive()
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError> {
        let from: Mailbox = email
            .from
            .parse()
            .map_err(|source| MailerError::InvalidAddress { field: "from", source })?;
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|source| MailerError::InvalidAddress { field: "to", source })?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(email.html_body.clone())?;

        self.transport.send(message).await?;

        tracing::info!(to = %email.to, subject = %email.subject, "email dispatched");
        Ok(())
    }
}
