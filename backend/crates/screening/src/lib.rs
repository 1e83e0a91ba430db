//! Screening (Email Risk Screening) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Value objects, entities, the risk scorer, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Pure, offline email risk scoring (disposable-domain list, suspicious
//!   regex patterns, trusted-provider adjustment, heuristic penalties)
//! - Signup that screens the email before issuing a credential
//! - Screening audit trail and per-client rate limiting
//!
//! ## Scoring Model
//! - Every input maps to a verdict; the scorer never fails
//! - Penalties accumulate into a saturating 0..=100 score
//! - Disposable domains and empty input are hard stops at 100
//! - The reject/advisory thresholds and all reference tables are
//!   configuration, not code

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ScreeningConfig;
pub use domain::scorer::{EmailRiskScorer, RiskPolicy};
pub use error::{ScreeningError, ScreeningResult};
pub use infra::postgres::PgScreeningRepository;
pub use presentation::router::screening_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgScreeningRepository as ScreeningStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
