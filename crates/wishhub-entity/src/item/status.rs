//! Item status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gifting status of a wish item. Surfaced in the shared read-only view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "item_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Nobody has claimed this item yet.
    Pending,
    /// Someone has promised to gift it.
    Reserved,
    /// The item has been gifted.
    Gifted,
}

impl ItemStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reserved => "reserved",
            Self::Gifted => "gifted",
        }
    }
}

impl Default for ItemStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = wishhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "reserved" => Ok(Self::Reserved),
            "gifted" => Ok(Self::Gifted),
            _ => Err(wishhub_core::AppError::validation(format!(
                "Invalid item status: '{s}'. Expected one of: pending, reserved, gifted"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("pending".parse::<ItemStatus>().unwrap(), ItemStatus::Pending);
        assert_eq!("Gifted".parse::<ItemStatus>().unwrap(), ItemStatus::Gifted);
        assert!("bought".parse::<ItemStatus>().is_err());
    }
}
