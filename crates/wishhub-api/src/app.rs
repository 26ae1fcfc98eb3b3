//! Application builder — wires repositories, services, and state into an
//! Axum app and runs it.

use std::sync::Arc;

use sqlx::PgPool;

use wishhub_auth::jwt::decoder::JwtDecoder;
use wishhub_auth::jwt::encoder::JwtEncoder;
use wishhub_auth::password::{PasswordHasher, PasswordValidator};
use wishhub_core::config::AppConfig;
use wishhub_core::error::AppError;

use wishhub_database::repositories::item::ItemRepository;
use wishhub_database::repositories::user::UserRepository;
use wishhub_database::repositories::wishlist::WishlistRepository;

use wishhub_service::sharing::{ShareCodeGenerator, ShareResolver, VisibilityService};
use wishhub_service::user::UserService;
use wishhub_service::wishlist::{ItemService, WishlistService};

use crate::middleware::rate_limit::RateLimiter;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the full application state from configuration and a database pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    // ── Repositories ─────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let wishlist_repo = Arc::new(WishlistRepository::new(db_pool.clone()));
    let item_repo = Arc::new(ItemRepository::new(db_pool.clone()));

    // ── Auth ─────────────────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    // ── Services ─────────────────────────────────────────────
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        Arc::clone(&jwt_encoder),
    ));
    let wishlist_service = Arc::new(WishlistService::new(
        Arc::clone(&wishlist_repo),
        Arc::clone(&item_repo),
    ));
    let item_service = Arc::new(ItemService::new(
        Arc::clone(&wishlist_repo),
        Arc::clone(&item_repo),
    ));
    let code_generator = Arc::new(ShareCodeGenerator::new());
    let visibility_service = Arc::new(VisibilityService::new(
        Arc::clone(&wishlist_repo),
        Arc::clone(&code_generator),
    ));
    let share_resolver = Arc::new(ShareResolver::new(
        Arc::clone(&wishlist_repo),
        Arc::clone(&item_repo),
    ));

    let rate_limiter = Arc::new(RateLimiter::new(
        config.server.rate_limit.burst,
        config.server.rate_limit.requests_per_second,
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        rate_limiter,
        jwt_decoder,
        user_service,
        wishlist_service,
        item_service,
        visibility_service,
        share_resolver,
    }
}

/// Runs the WishHub server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, db_pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("WishHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
    }
}
