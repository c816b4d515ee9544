//! Core types for the folio portfolio contact relay.
//!
//! Defines the contact submission entity, the field-level validation
//! rules shared by the site and the gateway, and HTML escaping for
//! user-supplied text.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod escape;
pub mod submission;
pub mod validate;

pub use error::CoreError;
pub use escape::escape_html;
pub use submission::{ContactSubmission, SubmissionDraft, SubmissionId};
pub use validate::{is_valid_email, is_valid_phone, validate, Field, FieldErrors};
