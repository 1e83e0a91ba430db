//! PostgreSQL Repository Implementations

use chrono::Utc;
use platform::client::ClientFingerprint;
use sqlx::PgPool;

use crate::domain::entity::{
    account::Account, credential::Credential, screening_event::ScreeningEvent,
};
use crate::domain::repository::{
    AccountRepository, CredentialRepository, RateLimitRepository, ScreeningEventRepository,
};
use crate::error::ScreeningResult;

/// PostgreSQL-backed screening repository
#[derive(Clone)]
pub struct PgScreeningRepository {
    pool: PgPool,
}

impl PgScreeningRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Clean up screening events past retention and stale rate-limit rows
    ///
    /// Returns (events_deleted, rate_limits_deleted).
    pub async fn cleanup_expired(&self, retention_ms: i64) -> ScreeningResult<(u64, u64)> {
        let now_ms = Utc::now().timestamp_millis();
        let cutoff_ms = now_ms - retention_ms;

        let events_deleted = sqlx::query("DELETE FROM screening_events WHERE created_at_ms < $1")
            .bind(cutoff_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        // Rate-limit windows older than an hour can never match again
        let old_window_ms = now_ms - 3_600_000;
        let rate_limits_deleted =
            sqlx::query("DELETE FROM screening_rate_limits WHERE window_start_ms < $1")
                .bind(old_window_ms)
                .execute(&self.pool)
                .await?
                .rows_affected();

        tracing::info!(
            events = events_deleted,
            rate_limits = rate_limits_deleted,
            "Cleaned up expired screening data"
        );

        Ok((events_deleted, rate_limits_deleted))
    }
}

// ============================================================================
// Account Repository Implementation
// ============================================================================

impl AccountRepository for PgScreeningRepository {
    async fn create(&self, account: &Account) -> ScreeningResult<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                public_id,
                email,
                email_risk_score,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.public_id.as_str())
        .bind(account.email.as_str())
        .bind(account.email_risk_score.value() as i16)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn exists_by_email(&self, email: &str) -> ScreeningResult<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists.0)
    }
}

// ============================================================================
// Credential Repository Implementation
// ============================================================================

impl CredentialRepository for PgScreeningRepository {
    async fn create(&self, credential: &Credential) -> ScreeningResult<()> {
        sqlx::query(
            r#"
            INSERT INTO credentials (
                account_id,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3)
            "#,
        )
        .bind(credential.account_id.as_uuid())
        .bind(credential.password_hash.as_phc_string())
        .bind(credential.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Screening Event Repository Implementation
// ============================================================================

impl ScreeningEventRepository for PgScreeningRepository {
    async fn record(&self, event: &ScreeningEvent) -> ScreeningResult<()> {
        sqlx::query(
            r#"
            INSERT INTO screening_events (
                event_id,
                email,
                domain,
                risk_score,
                accepted,
                client_ip,
                user_agent,
                created_at_ms
            ) VALUES ($1, $2, $3, $4, $5, $6::inet, $7, $8)
            "#,
        )
        .bind(event.event_id.as_uuid())
        .bind(&event.email)
        .bind(&event.domain)
        .bind(event.risk_score.value() as i16)
        .bind(event.accepted)
        .bind(event.client_ip.map(|ip| ip.to_string()))
        .bind(&event.user_agent)
        .bind(event.created_at_ms)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Rate Limit Repository Implementation
// ============================================================================

impl RateLimitRepository for PgScreeningRepository {
    async fn check_and_increment(
        &self,
        fingerprint: &ClientFingerprint,
        max_requests: u32,
        window_ms: i64,
    ) -> ScreeningResult<bool> {
        let now_ms = Utc::now().timestamp_millis();
        let window_start = (now_ms / window_ms) * window_ms;

        let row: (i32,) = sqlx::query_as(
            r#"
            INSERT INTO screening_rate_limits (client_fingerprint_hash, window_start_ms, request_count)
            VALUES ($1, $2, 1)
            ON CONFLICT (client_fingerprint_hash, window_start_ms)
            DO UPDATE SET request_count = screening_rate_limits.request_count + 1
            RETURNING request_count
            "#,
        )
        .bind(fingerprint.hash_vec())
        .bind(window_start)
        .fetch_one(&self.pool)
        .await?;

        let count = row.0 as u32;
        let allowed = count <= max_requests;

        if !allowed {
            tracing::warn!(count = count, max = max_requests, "Rate limit exceeded");
        }

        Ok(allowed)
    }
}

