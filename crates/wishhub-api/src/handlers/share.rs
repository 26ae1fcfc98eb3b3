//! Share settings, share-code regeneration, and public access handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use wishhub_service::sharing::SharedWishlist;

use crate::dto::request::ShareSettingsRequest;
use crate::dto::response::{ShareCodeResponse, WishlistResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// PUT /api/wishlists/{id}/share-settings
pub async fn update_share_settings(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ShareSettingsRequest>,
) -> Result<Json<WishlistResponse>, ApiError> {
    let wishlist = state
        .visibility_service
        .set_visibility(&auth, id, req.is_public)
        .await?;
    Ok(Json(WishlistResponse::from(wishlist)))
}

/// POST /api/wishlists/{id}/share-code
pub async fn generate_share_code(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ShareCodeResponse>, ApiError> {
    let share_code = state.visibility_service.generate_share_code(&auth, id).await?;
    Ok(Json(ShareCodeResponse { share_code }))
}

/// GET /api/shared-wishlists/{share_code} — public, unauthenticated access
pub async fn resolve_shared(
    State(state): State<AppState>,
    Path(share_code): Path<String>,
) -> Result<Json<SharedWishlist>, ApiError> {
    let shared = state.share_resolver.resolve(&share_code).await?;
    Ok(Json(shared))
}
