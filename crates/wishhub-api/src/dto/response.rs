//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wishhub_entity::item::{ItemPriority, ItemStatus, WishlistItem};
use wishhub_entity::user::User;
use wishhub_entity::wishlist::{Wishlist, WishlistStatus};
use wishhub_service::wishlist::WishlistWithItems;

/// Bearer token issued at registration/login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed bearer token.
    pub token: String,
}

/// User profile for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Email.
    pub email: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Owner's view of a wishlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistResponse {
    /// Wishlist ID.
    pub id: Uuid,
    /// Owning user.
    pub owner_id: Uuid,
    /// Name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: WishlistStatus,
    /// Visibility flag.
    pub is_public: bool,
    /// Share code, if the list has ever been published.
    pub share_code: Option<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
    /// Items (populated on the detail endpoint only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemResponse>,
}

impl From<Wishlist> for WishlistResponse {
    fn from(wishlist: Wishlist) -> Self {
        Self {
            id: wishlist.id,
            owner_id: wishlist.owner_id,
            name: wishlist.name,
            description: wishlist.description,
            status: wishlist.status,
            is_public: wishlist.is_public,
            share_code: wishlist.share_code,
            created_at: wishlist.created_at,
            updated_at: wishlist.updated_at,
            items: Vec::new(),
        }
    }
}

impl From<WishlistWithItems> for WishlistResponse {
    fn from(detail: WishlistWithItems) -> Self {
        let mut response = Self::from(detail.wishlist);
        response.items = detail.items.into_iter().map(ItemResponse::from).collect();
        response
    }
}

/// Owner's view of a wishlist item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResponse {
    /// Item ID.
    pub id: Uuid,
    /// Parent wishlist.
    pub wishlist_id: Uuid,
    /// Name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Priority tier.
    pub priority: ItemPriority,
    /// Gifting status.
    pub status: ItemStatus,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<WishlistItem> for ItemResponse {
    fn from(item: WishlistItem) -> Self {
        Self {
            id: item.id,
            wishlist_id: item.wishlist_id,
            name: item.name,
            description: item.description,
            priority: item.priority,
            status: item.status,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// Freshly issued share code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareCodeResponse {
    /// The new share code.
    pub share_code: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
}
