//! Sliding-window rate limiter keyed by an arbitrary identifier.
//!
//! Each identifier keeps a log of the instants its permitted calls were made.
//! Logs live in a `moka` cache bounded by `max_keys` and expired after one
//! idle window, so identifiers that stop calling are eventually dropped.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use moka::sync::Cache;

use crate::config::RateLimitConfig;

type RequestLog = Arc<Mutex<VecDeque<Instant>>>;

/// Per-identifier gate allowing at most `max_requests` calls per `window`.
///
/// Cheap to clone; clones share the same request logs.
#[derive(Clone)]
pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    requests: Cache<String, RequestLog>,
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("max_requests", &self.max_requests)
            .field("window", &self.window)
            .field("tracked", &self.requests.entry_count())
            .finish()
    }
}

impl RateLimiter {
    /// Create a limiter from its configuration.
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        let requests = Cache::builder()
            .max_capacity(config.max_keys)
            .time_to_idle(config.window)
            .build();

        Self {
            max_requests: config.max_requests,
            window: config.window,
            requests,
        }
    }

    /// Record a call for `identifier` now; returns whether it is permitted.
    #[must_use]
    pub fn check(&self, identifier: &str) -> bool {
        self.check_at(identifier, Instant::now())
    }

    /// Record a call for `identifier` at `now`; returns whether it is permitted.
    ///
    /// Timestamps at least one window older than `now` are evicted first.
    /// Rejected calls are not recorded.
    #[must_use]
    pub fn check_at(&self, identifier: &str, now: Instant) -> bool {
        let log = self
            .requests
            .get_with(identifier.to_owned(), || Arc::new(Mutex::new(VecDeque::new())));
        let mut log = log.lock().unwrap_or_else(PoisonError::into_inner);

        while log
            .front()
            .is_some_and(|oldest| now.saturating_duration_since(*oldest) >= self.window)
        {
            log.pop_front();
        }

        if log.len() >= self.max_requests {
            tracing::warn!(identifier, limit = self.max_requests, "Rate limit exceeded");
            return false;
        }

        log.push_back(now);
        true
    }

    /// Number of identifiers currently tracked.
    #[must_use]
    pub fn tracked_identifiers(&self) -> u64 {
        self.requests.run_pending_tasks();
        self.requests.entry_count()
    }
}
