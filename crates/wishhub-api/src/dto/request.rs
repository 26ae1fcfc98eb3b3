//! Request DTOs with validation.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use wishhub_entity::item::{ItemPriority, ItemStatus, UpdateItem};
use wishhub_entity::wishlist::{UpdateWishlist, WishlistStatus};

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Password (policy checked by the user service).
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create wishlist request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateWishlistRequest {
    /// Wishlist name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    /// Description (optional).
    pub description: Option<String>,
}

/// Partial wishlist update. Absent fields keep their current value;
/// `"description": null` clears the description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateWishlistRequest {
    /// New name.
    pub name: Option<String>,
    /// New description.
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    /// New status.
    pub status: Option<WishlistStatus>,
}

impl From<UpdateWishlistRequest> for UpdateWishlist {
    fn from(req: UpdateWishlistRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            status: req.status,
        }
    }
}

/// Share settings request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareSettingsRequest {
    /// Whether the wishlist should be publicly resolvable.
    pub is_public: bool,
}

/// Create item request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateItemRequest {
    /// Item name.
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
    /// Description (optional).
    pub description: Option<String>,
    /// Priority tier (defaults to medium).
    pub priority: Option<ItemPriority>,
}

/// Partial item update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    /// New name.
    pub name: Option<String>,
    /// New description.
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    /// New priority tier.
    pub priority: Option<ItemPriority>,
    /// New gifting status.
    pub status: Option<ItemStatus>,
}

impl From<UpdateItemRequest> for UpdateItem {
    fn from(req: UpdateItemRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            priority: req.priority,
            status: req.status,
        }
    }
}

/// Deserializes a field so that "absent", "null", and "value" stay
/// distinguishable: absent → `None` (via `default`), null →
/// `Some(None)`, value → `Some(Some(v))`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
