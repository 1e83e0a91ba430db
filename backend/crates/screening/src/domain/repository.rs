//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use platform::client::ClientFingerprint;

use crate::domain::entity::{
    account::Account, credential::Credential, screening_event::ScreeningEvent,
};
use crate::error::ScreeningResult;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Create a new account
    async fn create(&self, account: &Account) -> ScreeningResult<()>;

    /// Check if an account exists for the normalized email
    ///
    /// The lookup runs after the risk check but before accepting a
    /// signup; it is not part of the scoring logic.
    async fn exists_by_email(&self, email: &str) -> ScreeningResult<bool>;
}

/// Credential repository trait
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Create a credential for an account
    async fn create(&self, credential: &Credential) -> ScreeningResult<()>;
}

/// Screening event (audit) repository trait
#[trait_variant::make(ScreeningEventRepository: Send)]
pub trait LocalScreeningEventRepository {
    /// Record one evaluation
    async fn record(&self, event: &ScreeningEvent) -> ScreeningResult<()>;
}

/// Rate limit repository trait
#[trait_variant::make(RateLimitRepository: Send)]
pub trait LocalRateLimitRepository {
    /// Increment the caller's counter for the current window
    ///
    /// Returns whether the request is still within the limit.
    async fn check_and_increment(
        &self,
        fingerprint: &ClientFingerprint,
        max_requests: u32,
        window_ms: i64,
    ) -> ScreeningResult<bool>;
}
