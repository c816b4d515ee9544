//! HTTP submission relay for the folio portfolio.
//!
//! A single authenticated endpoint accepts the contact form as
//! multipart form data, validates it, and forwards it as an email
//! through `folio-mailer`. Stateless apart from the in-memory
//! rate-limit windows.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod rate_limit;
pub mod routes;
