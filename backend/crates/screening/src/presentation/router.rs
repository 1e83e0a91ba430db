//! Screening Router

use axum::Router;
use axum::routing::post;
use std::sync::Arc;

use crate::application::config::ScreeningConfig;
use crate::domain::repository::{
    AccountRepository, CredentialRepository, RateLimitRepository, ScreeningEventRepository,
};
use crate::infra::postgres::PgScreeningRepository;
use crate::presentation::handlers::{ScreeningAppState, sign_up, validate_email};

/// Build the screening router backed by Postgres
pub fn screening_router(repo: PgScreeningRepository, config: ScreeningConfig) -> Router {
    screening_router_generic(Arc::new(repo), Arc::new(config))
}

/// Build the screening router over any repository implementation
///
/// Generic over the repository so tests can plug in an in-memory store.
pub fn screening_router_generic<R>(repo: Arc<R>, config: Arc<ScreeningConfig>) -> Router
where
    R: AccountRepository
        + CredentialRepository
        + ScreeningEventRepository
        + RateLimitRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let state = ScreeningAppState { repo, config };

    Router::new()
        .route("/validate", post(validate_email::<R>))
        .route("/signup", post(sign_up::<R>))
        .with_state(state)
}
