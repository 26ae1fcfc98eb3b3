//! Route definitions for the WishHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(wishlist_routes())
        .merge(share_routes())
        .merge(item_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::rate_limit::rate_limit,
        ))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Wishlist CRUD
fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/wishlists", get(handlers::wishlist::list_wishlists))
        .route("/wishlists", post(handlers::wishlist::create_wishlist))
        .route("/wishlists/{id}", get(handlers::wishlist::get_wishlist))
        .route("/wishlists/{id}", put(handlers::wishlist::update_wishlist))
        .route(
            "/wishlists/{id}",
            delete(handlers::wishlist::delete_wishlist),
        )
}

/// Visibility, share-code issuance, and public access
fn share_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/wishlists/{id}/share-settings",
            put(handlers::share::update_share_settings),
        )
        .route(
            "/wishlists/{id}/share-code",
            post(handlers::share::generate_share_code),
        )
        .route(
            "/shared-wishlists/{share_code}",
            get(handlers::share::resolve_shared),
        )
}

/// Item CRUD nested under wishlists
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/wishlists/{id}/items", post(handlers::item::add_item))
        .route(
            "/wishlists/{id}/items/{item_id}",
            get(handlers::item::get_item),
        )
        .route(
            "/wishlists/{id}/items/{item_id}",
            put(handlers::item::update_item),
        )
        .route(
            "/wishlists/{id}/items/{item_id}",
            delete(handlers::item::delete_item),
        )
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
