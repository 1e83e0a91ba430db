//! Account Entity
//!
//! An account created through the screened signup flow. Sensitive
//! credential data lives in the Credential entity.

use chrono::{DateTime, Utc};
use kernel::id::AccountId;

use crate::domain::value_object::{email::Email, public_id::PublicId, risk::RiskScore};

/// Account entity
#[derive(Debug, Clone)]
pub struct Account {
    /// Internal UUID identifier
    pub account_id: AccountId,
    /// Public-facing nanoid identifier (URL-safe)
    pub public_id: PublicId,
    /// Screened, normalized email address (unique)
    pub email: Email,
    /// Risk score the email carried when the account was created
    pub email_risk_score: RiskScore,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account for a screened email
    pub fn new(email: Email, email_risk_score: RiskScore) -> Self {
        let now = Utc::now();

        Self {
            account_id: AccountId::new(),
            public_id: PublicId::new(),
            email,
            email_risk_score,
            created_at: now,
            updated_at: now,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account() {
        let email = Email::new("jane.doe@example.com").unwrap();
        let account = Account::new(email.clone(), RiskScore::new(10));

        assert_eq!(account.email, email);
        assert_eq!(account.email_risk_score.value(), 10);
        assert_eq!(account.created_at, account.updated_at);
    }
}
