//! Share-code resolution — the unauthenticated read path.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wishhub_core::error::AppError;
use wishhub_database::repositories::item::ItemRepository;
use wishhub_database::repositories::wishlist::WishlistRepository;
use wishhub_entity::item::{ItemPriority, ItemStatus, WishlistItem};
use wishhub_entity::wishlist::Wishlist;

/// Read-only projection of a shared wishlist.
///
/// Owner identity, the share code itself, the visibility flag, and update
/// timestamps are deliberately absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedWishlist {
    /// Display name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// When the wishlist was created.
    pub created_at: DateTime<Utc>,
    /// Items in creation order.
    pub items: Vec<SharedItem>,
}

/// Read-only projection of a single item in a shared wishlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedItem {
    /// Item identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Priority tier.
    pub priority: ItemPriority,
    /// Gifting status.
    pub status: ItemStatus,
}

impl SharedWishlist {
    /// Builds the public projection of a wishlist and its items.
    pub fn project(wishlist: Wishlist, items: Vec<WishlistItem>) -> Self {
        Self {
            name: wishlist.name,
            description: wishlist.description,
            created_at: wishlist.created_at,
            items: items
                .into_iter()
                .map(|item| SharedItem {
                    id: item.id,
                    name: item.name,
                    description: item.description,
                    priority: item.priority,
                    status: item.status,
                })
                .collect(),
        }
    }
}

/// Resolves opaque share codes to wishlist projections for anonymous
/// visitors.
#[derive(Debug, Clone)]
pub struct ShareResolver {
    /// Wishlist repository.
    wishlist_repo: Arc<WishlistRepository>,
    /// Item repository.
    item_repo: Arc<ItemRepository>,
}

impl ShareResolver {
    /// Creates a new share resolver.
    pub fn new(wishlist_repo: Arc<WishlistRepository>, item_repo: Arc<ItemRepository>) -> Self {
        Self {
            wishlist_repo,
            item_repo,
        }
    }

    /// Resolves a share code to a public wishlist projection.
    ///
    /// Unknown codes and codes pointing at currently-private wishlists
    /// fail identically, so anonymous callers cannot learn whether a
    /// private wishlist exists.
    pub async fn resolve(&self, share_code: &str) -> Result<SharedWishlist, AppError> {
        let wishlist = self
            .wishlist_repo
            .find_public_by_share_code(share_code)
            .await?
            .ok_or_else(|| AppError::not_found("Wishlist not found"))?;

        let items = self.item_repo.find_by_wishlist(wishlist.id).await?;

        Ok(SharedWishlist::project(wishlist, items))
    }
}
