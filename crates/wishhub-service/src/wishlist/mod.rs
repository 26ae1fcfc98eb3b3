//! Wishlist and item services.

pub mod items;
pub mod service;

pub use items::ItemService;
pub use service::{WishlistService, WishlistWithItems};

use uuid::Uuid;

use wishhub_core::error::AppError;
use wishhub_database::repositories::wishlist::WishlistRepository;
use wishhub_entity::wishlist::Wishlist;

use crate::context::RequestContext;

/// Loads a wishlist and enforces that the caller owns it.
///
/// Missing id maps to `NotFound`; an existing wishlist owned by someone
/// else maps to `Forbidden`.
pub(crate) async fn load_owned(
    repo: &WishlistRepository,
    ctx: &RequestContext,
    wishlist_id: Uuid,
) -> Result<Wishlist, AppError> {
    let wishlist = repo
        .find_by_id(wishlist_id)
        .await?
        .ok_or_else(|| AppError::not_found("Wishlist not found"))?;

    if wishlist.owner_id != ctx.user_id {
        return Err(AppError::forbidden("You do not own this wishlist"));
    }

    Ok(wishlist)
}
