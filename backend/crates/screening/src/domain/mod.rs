//! Domain Layer
//!
//! Contains value objects, entities, the risk scorer, and repository traits.

pub mod entity;
pub mod repository;
pub mod scorer;
pub mod value_object;

// Re-exports
pub use entity::{account::Account, credential::Credential, screening_event::ScreeningEvent};
pub use repository::{
    AccountRepository, CredentialRepository, RateLimitRepository, ScreeningEventRepository,
};
pub use scorer::{EmailRiskScorer, RiskPolicy};
