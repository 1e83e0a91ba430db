//! Sign Up Use Case
//!
//! Creates a new account: risk-screens the email, rejects duplicates,
//! validates and hashes the password, persists account + credential.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::ScreeningConfig;
use crate::domain::entity::{account::Account, credential::Credential};
use crate::domain::repository::{AccountRepository, CredentialRepository};
use crate::domain::scorer::EmailRiskScorer;
use crate::domain::value_object::email::Email;
use crate::error::{ScreeningError, ScreeningResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
}

/// Sign up output
pub struct SignUpOutput {
    pub public_id: String,
    pub email_risk_score: u8,
}

/// Sign up use case
pub struct SignUpUseCase<A, C>
where
    A: AccountRepository,
    C: CredentialRepository,
{
    account_repo: Arc<A>,
    credential_repo: Arc<C>,
    config: Arc<ScreeningConfig>,
}

impl<A, C> SignUpUseCase<A, C>
where
    A: AccountRepository,
    C: CredentialRepository,
{
    pub fn new(account_repo: Arc<A>, credential_repo: Arc<C>, config: Arc<ScreeningConfig>) -> Self {
        Self {
            account_repo,
            credential_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignUpInput) -> ScreeningResult<SignUpOutput> {
        // Screen the email before anything touches the database
        let scorer = EmailRiskScorer::new(&self.config.policy);
        let verdict = scorer.evaluate(&input.email);

        if !verdict.is_valid {
            return Err(ScreeningError::EmailRejected {
                reasons: verdict.errors,
            });
        }

        let email = Email::new(input.email).map_err(|e| ScreeningError::EmailRejected {
            reasons: vec![e.message().to_string()],
        })?;

        if self.account_repo.exists_by_email(email.as_str()).await? {
            return Err(ScreeningError::EmailAlreadyRegistered);
        }

        // Validate and hash password
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| ScreeningError::PasswordValidation(e.to_string()))?;

        if self.config.check_password_breach {
            match password.check_breach().await {
                Ok(true) => {
                    return Err(ScreeningError::PasswordValidation(
                        "This password has been compromised in a data breach".to_string(),
                    ));
                }
                Ok(false) => {}
                // Breach check is advisory; an API outage must not block signup
                Err(e) => {
                    tracing::warn!(error = %e, "Password breach check failed, continuing");
                }
            }
        }

        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| ScreeningError::Internal(e.to_string()))?;

        // Create and persist
        let account = Account::new(email, verdict.risk_score);
        let credential = Credential::new(account.account_id, password_hash);

        self.account_repo.create(&account).await?;
        self.credential_repo.create(&credential).await?;

        tracing::info!(
            public_id = %account.public_id,
            email = %account.email,
            risk_score = verdict.risk_score.value(),
            "Account created"
        );

        Ok(SignUpOutput {
            public_id: account.public_id.to_string(),
            email_risk_score: verdict.risk_score.value(),
        })
    }
}
