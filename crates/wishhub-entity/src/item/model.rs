//! Wishlist item entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::priority::ItemPriority;
use super::status::ItemStatus;

/// A desired entry within a wishlist.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WishlistItem {
    /// Unique item identifier.
    pub id: Uuid,
    /// Parent wishlist.
    pub wishlist_id: Uuid,
    /// Display name (non-empty after trimming).
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Priority tier.
    pub priority: ItemPriority,
    /// Gifting status.
    pub status: ItemStatus,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItem {
    /// Parent wishlist.
    pub wishlist_id: Uuid,
    /// Display name.
    pub name: String,
    /// Description (optional).
    pub description: Option<String>,
    /// Priority tier.
    pub priority: ItemPriority,
}

/// Partial update of an item. Only supplied fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItem {
    /// New display name.
    pub name: Option<String>,
    /// New description (`Some(None)` clears it).
    pub description: Option<Option<String>>,
    /// New priority tier.
    pub priority: Option<ItemPriority>,
    /// New gifting status.
    pub status: Option<ItemStatus>,
}
