//! Mailer configuration, read from the environment at startup.
//!
//! Credentials are never hardcoded; every value comes from the process
//! environment so secrets stay rotateable.

use serde::{Deserialize, Serialize};

use crate::error::MailerError;

/// SMTP account and addressing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct MailerConfig {
    /// SMTP relay hostname (e.g. `smtp.gmail.com`).
    pub smtp_host: String,

    /// Username for SMTP authentication.
    pub smtp_user: String,

    /// Password or app-specific password for SMTP authentication.
    pub smtp_pass: String,

    /// Sender address placed in the `From` header.
    pub from: String,

    /// Fixed recipient inbox for all contact submissions.
    pub to: String,
}

impl MailerConfig {
    /// Reads the configuration from `FOLIO_SMTP_HOST`, `FOLIO_SMTP_USER`,
    /// `FOLIO_SMTP_PASS`, `FOLIO_MAIL_TO`, and the optional
    /// `FOLIO_MAIL_FROM` (defaults to the SMTP user).
    ///
    /// # Errors
    /// Returns [`MailerError::MissingVar`] for the first required
    /// variable that is absent.
    pub fn from_env() -> Result<Self, MailerError> {
        let smtp_host = require("FOLIO_SMTP_HOST")?;
        let smtp_user = require("FOLIO_SMTP_USER")?;
        let smtp_pass = require("FOLIO_SMTP_PASS")?;
        let to = require("FOLIO_MAIL_TO")?;
        let from = std::env::var("FOLIO_MAIL_FROM").unwrap_or_else(|_| smtp_user.clone());

        Ok(Self { smtp_host, smtp_user, smtp_pass, from, to })
    }
}

fn require(var: &'static str) -> Result<String, MailerError> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(MailerError::MissingVar { var })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_names_the_variable() {
        // Not set in the test environment.
        let err = match require("FOLIO_TEST_UNSET_VARIABLE") {
            Err(e) => e,
            Ok(v) => panic!("unexpected value: {v}"),
        };
        assert!(
            err.to_string().contains("FOLIO_TEST_UNSET_VARIABLE"),
            "error must name the missing variable"
        );
    }
}
