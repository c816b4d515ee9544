//! The contact form's submission state machine.
//!
//! `idle → validating → (invalid: idle with errors) | (valid: sending)
//! → delivered → idle` after a fixed display window. Validation runs
//! locally with the same rules the gateway applies, so an invalid draft
//! never reaches the network.
//!
//! One deliberate oddity is preserved from the deployed site: a
//! transport failure still shows the visitor the success message and
//! clears the form. The machine records what actually happened in
//! [`FlowState::Delivered::confirmed`] so the displayed message and the
//! delivery signal stay separate — which of the two drives the UI is a
//! product decision, not a code one.

use std::time::Duration;

use folio_core::{validate, ContactSubmission, Field, FieldErrors, SubmissionDraft};

use crate::error::SiteError;

/// Status line shown while the relay call is in flight.
pub const SENDING_MESSAGE: &str = "Sending your message...";

/// Status line shown when local validation fails.
pub const FIX_ERRORS_MESSAGE: &str = "Please fix the errors above and try again.";

/// Status line shown after the attempt completes — regardless of outcome.
pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. I'll get back to you within 24 hours.";

/// How long the success state stays on screen before reverting to idle.
const SUCCESS_DISPLAY_WINDOW: Duration = Duration::from_secs(5);

/// Visual category of the current status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Error,
    Success,
}

/// A status line plus its visual category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub message: &'static str,
}

/// Where the form currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Accepting edits; may be carrying validation errors.
    Idle,
    /// A relay call is in flight; the submit control is disabled.
    Sending,
    /// The attempt completed and the success display is showing.
    /// `confirmed` is `true` only if the gateway acknowledged delivery.
    Delivered { confirmed: bool },
}

/// Deterministic state machine behind the contact form.
///
/// Time is injected through [`SubmissionFlow::tick`], so the machine
/// itself never reads a clock.
#[derive(Debug)]
pub struct SubmissionFlow {
    draft: SubmissionDraft,
    errors: FieldErrors,
    state: FlowState,
    status: Option<StatusMessage>,
    displayed_for: Duration,
}

impl SubmissionFlow {
    /// Creates an empty idle form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            draft: SubmissionDraft::default(),
            errors: FieldErrors::new(),
            state: FlowState::Idle,
            status: None,
            displayed_for: Duration::ZERO,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Current per-field validation errors.
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Current form contents.
    #[must_use]
    pub fn draft(&self) -> &SubmissionDraft {
        &self.draft
    }

    /// Current status line, if one is showing.
    #[must_use]
    pub fn status(&self) -> Option<StatusMessage> {
        self.status
    }

    /// `true` while a relay call is in flight.
    #[must_use]
    pub fn is_sending(&self) -> bool {
        matches!(self.state, FlowState::Sending)
    }

    /// Updates one field and clears that field's error, matching the
    /// form's clear-on-input behavior.
    pub fn edit(&mut self, field: Field, value: &str) {
        match field {
            Field::Name => self.draft.name = value.to_owned(),
            Field::Email => self.draft.email = value.to_owned(),
            Field::Phone => self.draft.phone_no = value.to_owned(),
            Field::Message => self.draft.message = value.to_owned(),
        }
        self.errors.clear(field);
    }

    /// Attempts to submit the form.
    ///
    /// Returns the validated submission to relay when the draft passes;
    /// returns `None` (and surfaces errors) when it does not, and is a
    /// no-op while a call is already in flight.
    pub fn submit(&mut self) -> Option<ContactSubmission> {
        if self.is_sending() {
            return None;
        }

        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            self.state = FlowState::Idle;
            self.status = Some(StatusMessage {
                kind: StatusKind::Error,
                message: FIX_ERRORS_MESSAGE,
            });
            return None;
        }

        // validate() just passed, so parse cannot fail on the same draft.
        let Ok(submission) = ContactSubmission::parse(self.draft.clone()) else {
            self.state = FlowState::Idle;
            return None;
        };

        self.state = FlowState::Sending;
        self.status = Some(StatusMessage {
            kind: StatusKind::Loading,
            message: SENDING_MESSAGE,
        });
        Some(submission)
    }

    /// Records the outcome of the relay call.
    ///
    /// The visitor sees the success message and a cleared form whether
    /// or not the gateway confirmed delivery; only
    /// [`FlowState::Delivered::confirmed`] distinguishes the two.
    pub fn complete(&mut self, outcome: &Result<(), SiteError>) {
        if !self.is_sending() {
            return;
        }
        if let Err(e) = outcome {
            tracing::warn!(error = %e, "relay call failed; showing success display anyway");
        }
        self.state = FlowState::Delivered { confirmed: outcome.is_ok() };
        self.status = Some(StatusMessage {
            kind: StatusKind::Success,
            message: SUCCESS_MESSAGE,
        });
        self.draft = SubmissionDraft::default();
        self.errors = FieldErrors::new();
        self.displayed_for = Duration::ZERO;
    }

    /// Advances display time; reverts the success display to idle once
    /// the fixed window has elapsed.
    pub fn tick(&mut self, elapsed: Duration) {
        if let FlowState::Delivered { .. } = self.state {
            self.displayed_for += elapsed;
            if self.displayed_for >= SUCCESS_DISPLAY_WINDOW {
                self.state = FlowState::Idle;
                self.status = None;
            }
        }
    }
}

impl Default for SubmissionFlow {
    fn default() -> Self {
        Self::new()
    }
}
