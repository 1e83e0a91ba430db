//! Rate Limiting Infrastructure
//!
//! Fixed-window rate limiting configuration. The screening API counts
//! validation attempts per client fingerprint; the counter itself lives
//! behind the domain's repository trait.

use std::time::Duration;

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests allowed in the window
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 20,
            window: Duration::from_secs(60),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }

    pub fn window_ms(&self) -> i64 {
        self.window.as_millis() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_window_ms() {
        let config = RateLimitConfig::new(5, 30);
        assert_eq!(config.max_requests, 5);
        assert_eq!(config.window_ms(), 30_000);
    }
}
