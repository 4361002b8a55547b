//! Checkout configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `QUICKCART_CATALOG_DELAY_MS` - Simulated catalog fetch latency (default: 100)
//! - `QUICKCART_PLACEMENT_DELAY_MS` - Simulated order placement latency (default: 1000)
//! - `QUICKCART_RATE_LIMIT_MAX_REQUESTS` - Placements allowed per window (default: 5)
//! - `QUICKCART_RATE_LIMIT_WINDOW_SECS` - Rate limit window length (default: 60)
//! - `QUICKCART_RATE_LIMIT_MAX_KEYS` - Maximum tracked identifiers (default: 10000)
//! - `QUICKCART_STEP_NAVIGATION` - `guarded` or `free` (default: guarded)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::time::Duration;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// How direct step jumps are policed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepNavigation {
    /// Any step can be jumped to at any time.
    Free,
    /// Backward jumps are always allowed; forward jumps require every
    /// earlier step to pass its own validation.
    #[default]
    Guarded,
}

impl std::str::FromStr for StepNavigation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "guarded" => Ok(Self::Guarded),
            other => Err(format!("expected `free` or `guarded`, got `{other}`")),
        }
    }
}

/// Sliding-window rate limit settings for order placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Requests allowed per identifier inside one window.
    pub max_requests: usize,
    /// Window length.
    pub window: Duration,
    /// Upper bound on the number of identifiers tracked at once.
    pub max_keys: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 5,
            window: Duration::from_secs(60),
            max_keys: 10_000,
        }
    }
}

/// Checkout application configuration.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Latency of the mock catalog calls
    pub catalog_delay: Duration,
    /// Latency of the mock order placement
    pub placement_delay: Duration,
    /// Order placement rate limit
    pub rate_limit: RateLimitConfig,
    /// Step jump policy
    pub step_navigation: StepNavigation,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            catalog_delay: Duration::from_millis(100),
            placement_delay: Duration::from_millis(1000),
            rate_limit: RateLimitConfig::default(),
            step_navigation: StepNavigation::default(),
            sentry_dsn: None,
        }
    }
}

impl CheckoutConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let catalog_delay = parse_or(&lookup, "QUICKCART_CATALOG_DELAY_MS", 100u64)?;
        let placement_delay = parse_or(&lookup, "QUICKCART_PLACEMENT_DELAY_MS", 1000u64)?;
        let max_requests = parse_or(
            &lookup,
            "QUICKCART_RATE_LIMIT_MAX_REQUESTS",
            defaults.rate_limit.max_requests,
        )?;
        let window_secs = parse_or(&lookup, "QUICKCART_RATE_LIMIT_WINDOW_SECS", 60u64)?;
        let max_keys = parse_or(
            &lookup,
            "QUICKCART_RATE_LIMIT_MAX_KEYS",
            defaults.rate_limit.max_keys,
        )?;
        let step_navigation = parse_or(
            &lookup,
            "QUICKCART_STEP_NAVIGATION",
            defaults.step_navigation,
        )?;

        if max_requests == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "QUICKCART_RATE_LIMIT_MAX_REQUESTS".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            catalog_delay: Duration::from_millis(catalog_delay),
            placement_delay: Duration::from_millis(placement_delay),
            rate_limit: RateLimitConfig {
                max_requests,
                window: Duration::from_secs(window_secs),
                max_keys,
            },
            step_navigation,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.trim().is_empty()),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional variable, falling back to `default` when unset.
fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}
