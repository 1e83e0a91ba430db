//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::client::{extract_client_ip, extract_fingerprint};

use crate::application::config::ScreeningConfig;
use crate::application::{SignUpInput, SignUpUseCase, ValidateEmailInput, ValidateEmailUseCase};
use crate::domain::repository::{
    AccountRepository, CredentialRepository, RateLimitRepository, ScreeningEventRepository,
};
use crate::error::{ScreeningError, ScreeningResult};
use crate::presentation::dto::{
    SignUpRequest, SignUpResponse, ValidateEmailRequest, ValidateEmailResponse,
};

/// Shared state for screening handlers
#[derive(Clone)]
pub struct ScreeningAppState<R>
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
    pub repo: Arc<R>,
    pub config: Arc<ScreeningConfig>,
}

// ============================================================================
// Validate Email
// ============================================================================

/// POST /api/email/validate
pub async fn validate_email<R>(
    State(state): State<ScreeningAppState<R>>,
    headers: axum::http::HeaderMap,
    axum::extract::ConnectInfo(addr): axum::extract::ConnectInfo<std::net::SocketAddr>,
    Json(req): Json<ValidateEmailRequest>,
) -> ScreeningResult<Json<ValidateEmailResponse>>
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
    // A body without a usable email is a request error, not a verdict
    if req.email.trim().is_empty() {
        return Err(ScreeningError::EmailRequired);
    }

    let client_ip = extract_client_ip(&headers, Some(addr.ip()));
    let fingerprint = extract_fingerprint(&headers, client_ip)?;

    let use_case = ValidateEmailUseCase::new(state.repo.clone(), state.config.clone());

    let input = ValidateEmailInput {
        email: req.email,
        action: req.action,
    };

    let output = use_case.execute(input, fingerprint).await?;

    Ok(Json(ValidateEmailResponse::from_verdict(
        output.verdict,
        output.normalized_email,
        output.domain,
    )))
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/email/signup
pub async fn sign_up<R>(
    State(state): State<ScreeningAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> ScreeningResult<impl IntoResponse>
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
    let use_case = SignUpUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            public_id: output.public_id,
        }),
    ))
}
