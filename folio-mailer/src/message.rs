//! Notification message composition.
//!
//! Builds the fixed HTML template for a contact submission. All four
//! user-supplied fields are HTML-escaped before interpolation so markup
//! in the form arrives in the inbox as literal text.

use folio_core::{escape_html, ContactSubmission};
use serde::{Deserialize, Serialize};

/// A fully composed email, ready for a [`crate::MailTransport`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Composes the contact-notification email for a validated submission.
#[must_use]
pub fn compose(submission: &ContactSubmission, from: &str, to: &str) -> OutgoingEmail {
    let name = escape_html(&submission.name);
    let email = escape_html(&submission.email);
    let phone = escape_html(&submission.phone_no);
    let message = escape_html(&submission.message);

    let html_body = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #8A2BE2;">New Contact Form Submission</h2>
  <div style="background: #f5f5f5; padding: 20px; border-radius: 10px; margin: 20px 0;">
    <h3 style="margin-top: 0;">Contact Details</h3>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Phone:</strong> {phone}</p>
  </div>
  <div style="background: #f9f9f9; padding: 20px; border-radius: 10px;">
    <h3 style="margin-top: 0;">Message</h3>
    <p style="line-height: 1.6;">{message}</p>
  </div>
  <hr style="margin: 30px 0; border: 1px solid #ddd;">
  <p style="color: #666; font-size: 12px;">
    This email was sent from your portfolio contact form
  </p>
</div>"#
    );

    OutgoingEmail {
        from: from.to_owned(),
        to: to.to_owned(),
        subject: format!("New Contact Form Submission from {}", submission.name),
        html_body,
    }
}
