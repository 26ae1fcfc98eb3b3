//! Wishlist status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a wishlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "wishlist_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WishlistStatus {
    /// The wishlist is in active use.
    Active,
    /// The wishlist has been archived by its owner.
    Archived,
}

impl WishlistStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for WishlistStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WishlistStatus {
    type Err = wishhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "archived" => Ok(Self::Archived),
            _ => Err(wishhub_core::AppError::validation(format!(
                "Invalid wishlist status: '{s}'. Expected one of: active, archived"
            ))),
        }
    }
}
