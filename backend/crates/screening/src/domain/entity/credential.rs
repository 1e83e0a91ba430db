//! Credential Entity
//!
//! Password credential for an account. Stored separately from the
//! account profile so credential rows never travel with profile reads.

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use platform::password::HashedPassword;

/// Credential entity
#[derive(Debug, Clone)]
pub struct Credential {
    /// Owning account
    pub account_id: AccountId,
    /// Argon2id hash in PHC format
    pub password_hash: HashedPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Credential {
    /// Create a new credential
    pub fn new(account_id: AccountId, password_hash: HashedPassword) -> Self {
        Self {
            account_id,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{email::Email, risk::RiskScore};
    use platform::password::ClearTextPassword;

    #[test]
    fn test_credential_shares_account_id() {
        let email = Email::new("jane.doe@example.com").unwrap();
        let account = crate::domain::entity::account::Account::new(email, RiskScore::new(10));

        let password = ClearTextPassword::new("correct horse battery staple".to_string()).unwrap();
        let hash = password.hash(None).unwrap();

        // The id is taken by value; the account must stay fully usable
        let credential = Credential::new(account.account_id, hash);
        assert_eq!(credential.account_id, account.account_id);
        assert_eq!(account.email.as_str(), "jane.doe@example.com");
    }
}
