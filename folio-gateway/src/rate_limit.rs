//! Fixed-window rate limiting keyed by client IP.
//!
//! Applied only to the contact route. Each source address gets a
//! counting window; once the count reaches the maximum, further
//! requests are rejected until the window expires. State is in-memory
//! and per-process — a restart clears all windows.

use std::{
    collections::HashMap,
    net::IpAddr,
    sync::Mutex,
    time::{Duration, Instant},
};

/// Rejection returned when a client exhausts its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitExceeded {
    /// Seconds until the current window expires.
    pub retry_after_secs: u64,
}

impl std::fmt::Display for RateLimitExceeded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rate limit exceeded, retry in {}s",
            self.retry_after_secs
        )
    }
}

impl std::error::Error for RateLimitExceeded {}

#[derive(Debug, Clone, Copy)]
struct Window {
    started_at: Instant,
    count: u32,
}

/// Thread-safe fixed-window counter per source address.
#[derive(Debug)]
pub struct RateLimiter {
    window: Duration,
    max_requests: u32,
    windows: Mutex<HashMap<IpAddr, Window>>,
}

impl RateLimiter {
    /// Creates a limiter allowing `max_requests` per `window` per IP.
    #[must_use]
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self { window, max_requests, windows: Mutex::new(HashMap::new()) }
    }

    /// Records a request from `ip` and decides whether to admit it.
    ///
    /// # Errors
    /// Returns [`RateLimitExceeded`] with a retry hint once the IP has
    /// used up its window.
    ///
    /// # Panics
    /// Panics if the internal `Mutex` is poisoned (a previous thread
    /// panicked while holding it).
    pub fn check(&self, ip: IpAddr) -> Result<(), RateLimitExceeded> {
        self.check_at(ip, Instant::now())
    }

    fn check_at(&self, ip: IpAddr, now: Instant) -> Result<(), RateLimitExceeded> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut windows = self.windows.lock().expect("rate limiter lock poisoned");

        let entry = windows
            .entry(ip)
            .or_insert(Window { started_at: now, count: 0 });

        // An expired window restarts at the current request.
        if now.duration_since(entry.started_at) >= self.window {
            *entry = Window { started_at: now, count: 0 };
        }

        if entry.count >= self.max_requests {
            let elapsed = now.duration_since(entry.started_at);
            let remaining = self.window.saturating_sub(elapsed);
            return Err(RateLimitExceeded {
                retry_after_secs: remaining.as_secs().max(1),
            });
        }

        entry.count += 1;
        Ok(())
    }
}
