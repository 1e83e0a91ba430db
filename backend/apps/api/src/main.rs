//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use screening::{PgScreeningRepository, ScreeningConfig, screening_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,screening=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Screening configuration
    let screening_config = build_screening_config()?;

    // Startup cleanup: remove expired screening data
    // Errors here should not prevent server startup
    let repo_for_cleanup = PgScreeningRepository::new(pool.clone());
    match repo_for_cleanup
        .cleanup_expired(screening_config.event_retention_ms())
        .await
    {
        Ok((events, rate_limits)) => {
            tracing::info!(
                events_deleted = events,
                rate_limits_deleted = rate_limits,
                "Screening data cleanup completed"
            );
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Screening data cleanup failed, continuing anyway"
            );
        }
    }

    let screening_repo = PgScreeningRepository::new(pool.clone());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest(
            "/api/email",
            screening_router(screening_repo, screening_config),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 31113));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Assemble the screening configuration from the environment
fn build_screening_config() -> anyhow::Result<ScreeningConfig> {
    let mut config = if cfg!(debug_assertions) {
        ScreeningConfig::development()
    } else {
        ScreeningConfig::default()
    };

    // Optional application-wide password pepper
    if let Ok(pepper_b64) = env::var("PASSWORD_PEPPER") {
        let pepper = Engine::decode(&general_purpose::STANDARD, &pepper_b64)?;
        config.password_pepper = Some(pepper);
    }

    // HIBP breach check is opt-in (requires outbound network access)
    if env::var("CHECK_PASSWORD_BREACH").as_deref() == Ok("true") {
        config.check_password_breach = true;
    }

    // Optional policy override file (thresholds, reference tables)
    if let Ok(path) = env::var("SCREENING_POLICY_PATH") {
        let json = std::fs::read_to_string(&path)?;
        config = config.with_policy_json(&json)?;
        tracing::info!(path = %path, "Loaded screening policy override");
    }

    Ok(config)
}
