//! Application Configuration
//!
//! Configuration for the Screening application layer.

use std::time::Duration;

use platform::rate_limit::RateLimitConfig;

use crate::domain::scorer::{PolicyLoadError, RiskPolicy};

/// Screening application configuration
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    /// Scorer policy (thresholds, weights, reference tables)
    pub policy: RiskPolicy,
    /// Per-fingerprint validation rate limit
    pub rate_limit: RateLimitConfig,
    /// Run the existing-account lookup for `action = signup` validations
    pub check_existing_on_signup: bool,
    /// Check passwords against the HIBP breach corpus during signup
    pub check_password_breach: bool,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// How long screening events are retained
    pub event_retention: Duration,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            policy: RiskPolicy::default(),
            rate_limit: RateLimitConfig::default(),
            check_existing_on_signup: true,
            check_password_breach: false,
            password_pepper: None,
            event_retention: Duration::from_secs(30 * 24 * 3600), // 30 days
        }
    }
}

impl ScreeningConfig {
    /// Create config for development (generous rate limit, no breach check)
    pub fn development() -> Self {
        Self {
            rate_limit: RateLimitConfig::new(1000, 60),
            ..Default::default()
        }
    }

    /// Replace the policy from a JSON document
    pub fn with_policy_json(mut self, json: &str) -> Result<Self, PolicyLoadError> {
        self.policy = RiskPolicy::from_json(json)?;
        Ok(self)
    }

    /// Get event retention in milliseconds
    pub fn event_retention_ms(&self) -> i64 {
        self.event_retention.as_millis() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScreeningConfig::default();
        assert_eq!(config.policy.reject_threshold, 70);
        assert_eq!(config.rate_limit.max_requests, 20);
        assert_eq!(config.rate_limit.window_ms(), 60_000);
        assert!(config.check_existing_on_signup);
    }

    #[test]
    fn test_with_policy_json() {
        let config = ScreeningConfig::default()
            .with_policy_json(r#"{ "profile": "strict", "rejectThreshold": 55 }"#)
            .unwrap();
        assert_eq!(config.policy.reject_threshold, 55);
        assert!(config.policy.short_circuit_on_format_error);
    }
}
