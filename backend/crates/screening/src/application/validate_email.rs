//! Validate Email Use Case
//!
//! Runs the risk scorer for a client-supplied address, optionally checks
//! for an existing account (signup pre-flight), and records the
//! evaluation in the audit trail.

use std::sync::Arc;

use platform::client::ClientFingerprint;

use crate::application::config::ScreeningConfig;
use crate::domain::entity::screening_event::ScreeningEvent;
use crate::domain::repository::{AccountRepository, RateLimitRepository, ScreeningEventRepository};
use crate::domain::scorer::EmailRiskScorer;
use crate::domain::value_object::risk::EmailVerdict;
use crate::error::{ScreeningError, ScreeningResult};

/// What the caller intends to do with the address
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidateAction {
    Validate,
    Signup,
}

impl Default for ValidateAction {
    fn default() -> Self {
        Self::Validate
    }
}

/// Validate email input
pub struct ValidateEmailInput {
    pub email: String,
    pub action: ValidateAction,
}

/// Validate email output
pub struct ValidateEmailOutput {
    pub verdict: EmailVerdict,
    /// Lowercased, trimmed form of the input
    pub normalized_email: String,
    /// Domain segment, when one could be extracted
    pub domain: Option<String>,
}

/// Validate email use case
pub struct ValidateEmailUseCase<R>
where
    R: AccountRepository + ScreeningEventRepository + RateLimitRepository,
{
    repo: Arc<R>,
    config: Arc<ScreeningConfig>,
}

impl<R> ValidateEmailUseCase<R>
where
    R: AccountRepository + ScreeningEventRepository + RateLimitRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<ScreeningConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        input: ValidateEmailInput,
        fingerprint: ClientFingerprint,
    ) -> ScreeningResult<ValidateEmailOutput> {
        let allowed = self
            .repo
            .check_and_increment(
                &fingerprint,
                self.config.rate_limit.max_requests,
                self.config.rate_limit.window_ms(),
            )
            .await?;
        if !allowed {
            return Err(ScreeningError::RateLimitExceeded);
        }

        let normalized_email = input.email.trim().to_lowercase();

        let scorer = EmailRiskScorer::new(&self.config.policy);
        let mut verdict = scorer.evaluate(&input.email);

        let domain = normalized_email
            .rsplit_once('@')
            .map(|(_, d)| d.to_string())
            .filter(|d| !d.is_empty());

        // Existing-account lookup is a signup concern, deliberately kept
        // outside the scorer (which stays a pure function)
        if input.action == ValidateAction::Signup
            && verdict.is_valid
            && self.config.check_existing_on_signup
            && self.repo.exists_by_email(&normalized_email).await?
        {
            verdict.reject("An account with this email already exists");
        }

        let event = ScreeningEvent::new(
            normalized_email.clone(),
            domain.clone(),
            verdict.risk_score,
            verdict.is_valid,
            fingerprint.ip,
            fingerprint.user_agent.clone(),
        );
        // Audit failures must not turn a verdict into an error
        if let Err(e) = self.repo.record(&event).await {
            tracing::warn!(error = %e, "Failed to record screening event");
        }

        tracing::info!(
            email = %normalized_email,
            risk_score = verdict.risk_score.value(),
            valid = verdict.is_valid,
            action = ?input.action,
            "Email validation"
        );

        Ok(ValidateEmailOutput {
            verdict,
            normalized_email,
            domain,
        })
    }
}
