//! Wishlist CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::dto::request::{CreateWishlistRequest, UpdateWishlistRequest};
use crate::dto::response::WishlistResponse;
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/wishlists
pub async fn list_wishlists(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<WishlistResponse>>, ApiError> {
    let wishlists = state.wishlist_service.list(&auth).await?;
    Ok(Json(
        wishlists.into_iter().map(WishlistResponse::from).collect(),
    ))
}

/// POST /api/wishlists
pub async fn create_wishlist(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateWishlistRequest>,
) -> Result<(StatusCode, Json<WishlistResponse>), ApiError> {
    validate_request(&req)?;

    let wishlist = state
        .wishlist_service
        .create(&auth, &req.name, req.description)
        .await?;

    Ok((StatusCode::CREATED, Json(WishlistResponse::from(wishlist))))
}

/// GET /api/wishlists/{id}
pub async fn get_wishlist(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<WishlistResponse>, ApiError> {
    let detail = state.wishlist_service.get(&auth, id).await?;
    Ok(Json(WishlistResponse::from(detail)))
}

/// PUT /api/wishlists/{id}
pub async fn update_wishlist(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateWishlistRequest>,
) -> Result<Json<WishlistResponse>, ApiError> {
    let wishlist = state
        .wishlist_service
        .update(&auth, id, req.into())
        .await?;
    Ok(Json(WishlistResponse::from(wishlist)))
}

/// DELETE /api/wishlists/{id}
pub async fn delete_wishlist(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.wishlist_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
