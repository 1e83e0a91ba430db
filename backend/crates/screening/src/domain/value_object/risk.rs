//! Risk Score and Verdict Value Objects
//!
//! [`RiskScore`] is the accumulated penalty for an email address,
//! saturating in `0..=100`. [`EmailVerdict`] is the immutable result of
//! one evaluation: the accept/reject decision plus ordered diagnostics.

use serde::{Deserialize, Serialize};

/// Accumulated risk penalty, clamped to `0..=100`
///
/// Penalties add saturating at 100; bonuses subtract flooring at 0.
/// The clamp keeps the published range honest even when several
/// penalties stack on one address.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RiskScore(u8);

impl RiskScore {
    /// No observed risk
    pub const ZERO: RiskScore = RiskScore(0);

    /// Hard rejection (disposable domain, unusable input)
    pub const MAX: RiskScore = RiskScore(100);

    /// Create a score, clamping to the valid range
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Add a penalty, saturating at 100
    pub fn add(&mut self, penalty: u8) {
        self.0 = self.0.saturating_add(penalty).min(100);
    }

    /// Subtract a bonus, flooring at 0
    pub fn subtract(&mut self, bonus: u8) {
        self.0 = self.0.saturating_sub(bonus);
    }

    /// Get the numeric value
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for RiskScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of evaluating one email address
///
/// Invariant: `errors` is non-empty exactly when `is_valid` is false.
/// Warnings never invalidate on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailVerdict {
    /// Final accept/reject decision
    pub is_valid: bool,
    /// Accumulated penalty
    pub risk_score: RiskScore,
    /// Hard-failure reasons, in evaluation order
    pub errors: Vec<String>,
    /// Soft-risk observations, in evaluation order
    pub warnings: Vec<String>,
}

impl EmailVerdict {
    /// Fresh verdict: valid, score zero, no diagnostics
    pub fn accept() -> Self {
        Self {
            is_valid: true,
            risk_score: RiskScore::ZERO,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Mark invalid with a reason
    pub fn reject(&mut self, reason: impl Into<String>) {
        self.is_valid = false;
        self.errors.push(reason.into());
    }

    /// Record a soft-risk observation
    pub fn warn(&mut self, observation: impl Into<String>) {
        self.warnings.push(observation.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_saturates_at_100() {
        let mut score = RiskScore::new(90);
        score.add(50);
        assert_eq!(score.value(), 100);
        assert_eq!(score, RiskScore::MAX);
    }

    #[test]
    fn test_score_floors_at_zero() {
        let mut score = RiskScore::new(10);
        score.subtract(20);
        assert_eq!(score, RiskScore::ZERO);
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(RiskScore::new(255).value(), 100);
        assert_eq!(RiskScore::new(42).value(), 42);
    }

    #[test]
    fn test_verdict_invariant() {
        let mut verdict = EmailVerdict::accept();
        assert!(verdict.is_valid);
        assert!(verdict.errors.is_empty());

        verdict.warn("looks odd");
        assert!(verdict.is_valid);

        verdict.reject("too risky");
        assert!(!verdict.is_valid);
        assert_eq!(verdict.errors, vec!["too risky".to_string()]);
    }
}
