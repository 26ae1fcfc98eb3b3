//! Wishlist entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::WishlistStatus;

/// A named, owned collection of wish items with a visibility flag.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Wishlist {
    /// Unique wishlist identifier.
    pub id: Uuid,
    /// User who owns this wishlist.
    pub owner_id: Uuid,
    /// Display name (non-empty after trimming).
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: WishlistStatus,
    /// Whether the wishlist is currently publicly resolvable.
    pub is_public: bool,
    /// Opaque share token. Set on first publication, kept across visibility
    /// toggles, replaced only by explicit regeneration.
    pub share_code: Option<String>,
    /// When the wishlist was created.
    pub created_at: DateTime<Utc>,
    /// When the wishlist was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new wishlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWishlist {
    /// Owning user.
    pub owner_id: Uuid,
    /// Display name.
    pub name: String,
    /// Description (optional).
    pub description: Option<String>,
}

/// Partial update of a wishlist. Only supplied fields change.
///
/// `description` is double-wrapped so that "absent" (keep the current value)
/// and "present but null" (clear the description) stay distinguishable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateWishlist {
    /// New display name.
    pub name: Option<String>,
    /// New description (`Some(None)` clears it).
    pub description: Option<Option<String>>,
    /// New lifecycle status.
    pub status: Option<WishlistStatus>,
}

impl Wishlist {
    /// Whether this wishlist has ever been published.
    pub fn has_share_code(&self) -> bool {
        self.share_code.is_some()
    }
}
