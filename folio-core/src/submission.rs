//! The contact submission entity.
//!
//! A submission is transient: created at form-submit time, validated,
//! transmitted once, and discarded. It is never persisted or mutated
//! after creation.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::validate::validate;

/// Unique identifier assigned to an accepted submission, used for log
/// correlation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct SubmissionId(pub Uuid);

impl SubmissionId {
    /// Creates a new random `SubmissionId`.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw form state as the user typed it, before any validation.
///
/// Field names mirror the wire format of `POST /v1/contact-mail`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionDraft {
    pub name: String,
    pub email: String,
    pub phone_no: String,
    pub message: String,
}

/// A validated, trimmed contact submission ready for transmission.
///
/// Construction is only possible through [`ContactSubmission::parse`],
/// so holding one is proof that every field rule passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ContactSubmission {
    /// Log-correlation identifier.
    pub id: SubmissionId,
    /// Sender's name, trimmed, at least 2 characters.
    pub name: String,
    /// Sender's email address, trimmed, regex-checked.
    pub email: String,
    /// Sender's phone number, trimmed (formatting characters retained).
    pub phone_no: String,
    /// The message body, trimmed, at least 10 characters.
    pub message: String,
    /// When the submission was created.
    pub received_at: DateTime<Utc>,
}

impl ContactSubmission {
    /// Validates a draft and, if every rule passes, produces a trimmed
    /// submission.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidSubmission`] carrying one error
    /// message per violated field.
    pub fn parse(draft: SubmissionDraft) -> Result<Self, CoreError> {
        let errors = validate(&draft);
        if !errors.is_empty() {
            return Err(CoreError::InvalidSubmission(errors));
        }
        Ok(Self {
            id: SubmissionId::new(),
            name: draft.name.trim().to_owned(),
            email: draft.email.trim().to_owned(),
            phone_no: draft.phone_no.trim().to_owned(),
            message: draft.message.trim().to_owned(),
            received_at: Utc::now(),
        })
    }

    /// Builds a submission from fields the relay endpoint has already
    /// checked.
    ///
    /// The relay contract enforces presence of all four fields and the
    /// email shape only; the full per-field rule set runs on the client.
    /// Callers are responsible for those two checks.
    #[must_use]
    pub fn from_parts(name: &str, email: &str, phone_no: &str, message: &str) -> Self {
        Self {
            id: SubmissionId::new(),
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            phone_no: phone_no.trim().to_owned(),
            message: message.trim().to_owned(),
            received_at: Utc::now(),
        }
    }
}
