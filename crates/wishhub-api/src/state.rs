//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use wishhub_auth::jwt::decoder::JwtDecoder;
use wishhub_core::config::AppConfig;

use wishhub_service::sharing::{ShareResolver, VisibilityService};
use wishhub_service::user::UserService;
use wishhub_service::wishlist::{ItemService, WishlistService};

use crate::middleware::rate_limit::RateLimiter;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool (health checks)
    pub db_pool: PgPool,
    /// In-memory request rate limiter
    pub rate_limiter: Arc<RateLimiter>,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder, used by the `AuthUser` extractor
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// User service
    pub user_service: Arc<UserService>,
    /// Wishlist service
    pub wishlist_service: Arc<WishlistService>,
    /// Item service
    pub item_service: Arc<ItemService>,
    /// Visibility/share-code service
    pub visibility_service: Arc<VisibilityService>,
    /// Share resolver (unauthenticated read path)
    pub share_resolver: Arc<ShareResolver>,
}
