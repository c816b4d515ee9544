//! Field-level validation for contact submissions.
//!
//! The same rules and compiled patterns run on the site (before the
//! network call) and in the gateway (before mail dispatch), so a draft
//! that passes locally is accepted remotely. Validation is a pure
//! function of the draft: no side effects, deterministic, idempotent.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::submission::SubmissionDraft;

/// RFC-light email shape: one `@`, no whitespace, a dot in the domain.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    #[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
    let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile");
    re
});

/// Accepted phone shapes after stripping spaces, hyphens, and parens:
/// `+` and 1-15 digits, `0` and 9-14 digits, or 10-15 bare digits.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    #[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
    let re = Regex::new(r"^(\+\d{1,15}|0\d{9,14}|\d{10,15})$").expect("phone pattern must compile");
    re
});

/// A submission field, in wire-name order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    #[serde(rename = "phone_no")]
    Phone,
    Message,
}

impl Field {
    /// Returns the wire-format field name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone_no",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation errors; an empty set means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    /// Creates an empty error set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the error message for a field, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// Removes the error for a single field. The site calls this when
    /// the user edits that field.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    /// Returns `true` if no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over `(field, message)` pairs in wire-name order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, *m))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Returns `true` if the trimmed input matches the shared email pattern.
///
/// Trimming here is deliberately lenient: surrounding whitespace alone
/// never fails the check. Both call sites (draft validation and the
/// relay endpoint) pass already-trimmed values, so the trim only
/// matters for direct callers.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Returns `true` if the input is an accepted phone number once spaces,
/// hyphens, and parentheses are stripped.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    let cleaned: String = phone
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    PHONE_RE.is_match(&cleaned)
}

/// Validates every field of a draft independently and returns one error
/// message per violated rule.
#[must_use]
pub fn validate(draft: &SubmissionDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.insert(Field::Name, "Name is required");
    } else if name.chars().count() < 2 {
        errors.insert(Field::Name, "Name must be at least 2 characters");
    }

    let email = draft.email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !is_valid_email(email) {
        errors.insert(Field::Email, "Please enter a valid email address");
    }

    let phone = draft.phone_no.trim();
    if phone.is_empty() {
        errors.insert(Field::Phone, "Phone number is required");
    } else if !is_valid_phone(phone) {
        errors.insert(Field::Phone, "Please enter a valid phone number");
    }

    let message = draft.message.trim();
    if message.is_empty() {
        errors.insert(Field::Message, "Message is required");
    } else if message.chars().count() < 10 {
        errors.insert(Field::Message, "Message must be at least 10 characters");
    }

    errors
}
