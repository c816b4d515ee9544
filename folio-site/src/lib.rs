//! Presentation layer of the folio portfolio, expressed as data and logic.
//!
//! The static sections (hero, skills, projects, social links) render
//! from the in-memory tables in [`content`]; the contact form drives
//! the [`flow::SubmissionFlow`] state machine and posts through
//! [`client::RelayClient`]. Nothing here fetches external data besides
//! the one relay call.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod client;
pub mod content;
pub mod error;
pub mod flow;

pub use client::RelayClient;
pub use error::SiteError;
pub use flow::{FlowState, StatusKind, StatusMessage, SubmissionFlow};
