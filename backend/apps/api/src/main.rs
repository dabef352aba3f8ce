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
use contacts::{PgContactRepository, contacts_router};
use identity::middleware::{IdentityMiddlewareState, require_access_token};
use identity::{IdentityConfig, PgIdentityRepository, identity_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
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
                .unwrap_or_else(|_| "api=info,identity=info,contacts=info,tower_http=info".into()),
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

    // Startup cleanup: remove expired access tokens
    // Errors here should not prevent server startup
    let identity_store_for_cleanup = PgIdentityRepository::new(pool.clone());
    match identity_store_for_cleanup.cleanup_expired().await {
        Ok(tokens) => {
            tracing::info!(tokens_deleted = tokens, "Access token cleanup completed");
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Access token cleanup failed, continuing anyway"
            );
        }
    }

    // Identity configuration
    let mut identity_config = if cfg!(debug_assertions) {
        IdentityConfig::development()
    } else {
        // In production, load secret from environment
        let secret_b64 =
            env::var("TOKEN_SECRET").expect("TOKEN_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        anyhow::ensure!(
            secret_bytes.len() == 32,
            "TOKEN_SECRET must decode to exactly 32 bytes"
        );
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        IdentityConfig {
            token_secret: secret,
            ..IdentityConfig::default()
        }
    };

    if let Ok(pepper_b64) = env::var("PASSWORD_PEPPER") {
        identity_config.password_pepper =
            Some(Engine::decode(&general_purpose::STANDARD, &pepper_b64)?);
    }

    let identity_repo = PgIdentityRepository::new(pool.clone());
    let contact_repo = PgContactRepository::new(pool.clone());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Contact routes sit behind the bearer-token middleware
    let middleware_state = IdentityMiddlewareState {
        repo: Arc::new(identity_repo.clone()),
        config: Arc::new(identity_config.clone()),
    };

    let protected_contacts =
        contacts_router(contact_repo).layer(axum::middleware::from_fn(move |req, next| {
            require_access_token(middleware_state.clone(), req, next)
        }));

    // Build router
    let app = Router::new()
        .merge(identity_router(identity_repo, identity_config))
        .merge(protected_contacts)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
