//! Gateway configuration, read from the environment at startup.

use std::time::Duration;

use folio_mailer::MailerConfig;

use crate::error::ConfigError;

/// Default bind address, matching the original deployment port.
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3001";

/// Default rate-limit window: 15 minutes.
const DEFAULT_RATE_WINDOW: Duration = Duration::from_secs(15 * 60);

/// Default maximum submissions per window per IP.
const DEFAULT_RATE_MAX_REQUESTS: u32 = 5;

/// Everything the gateway binary needs to start serving.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Address the HTTP listener binds to.
    pub listen_addr: String,

    /// Static shared secret distinguishing the portfolio form from
    /// arbitrary callers.
    pub api_key: String,

    /// Rate-limit window length for the contact route.
    pub rate_window: Duration,

    /// Maximum submissions per window per source address.
    pub rate_max_requests: u32,

    /// SMTP account and addressing.
    pub mailer: MailerConfig,
}

impl GatewayConfig {
    /// Reads the configuration from the environment.
    ///
    /// `FOLIO_API_KEY` and the mailer variables are required;
    /// `FOLIO_LISTEN_ADDR`, `FOLIO_RATE_WINDOW_SECS`, and
    /// `FOLIO_RATE_MAX_REQUESTS` fall back to defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a required variable is absent or a
    /// numeric override cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = std::env::var("FOLIO_LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_owned());

        let api_key = std::env::var("FOLIO_API_KEY")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar { var: "FOLIO_API_KEY" })?;

        let rate_window = match std::env::var("FOLIO_RATE_WINDOW_SECS") {
            Ok(raw) => Duration::from_secs(parse_var("FOLIO_RATE_WINDOW_SECS", &raw)?),
            Err(_) => DEFAULT_RATE_WINDOW,
        };

        let rate_max_requests = match std::env::var("FOLIO_RATE_MAX_REQUESTS") {
            Ok(raw) => parse_var("FOLIO_RATE_MAX_REQUESTS", &raw)?,
            Err(_) => DEFAULT_RATE_MAX_REQUESTS,
        };

        let mailer = MailerConfig::from_env()?;

        Ok(Self { listen_addr, api_key, rate_window, rate_max_requests, mailer })
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::InvalidVar {
        var,
        reason: e.to_string(),
    })
}
