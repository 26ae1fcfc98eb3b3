//! Item priority enumeration.
//!
//! Priorities travel over the wire as their integer tier (`low = 0`,
//! `medium = 1`, `high = 2`) and are stored as a `SMALLINT`, so the enum
//! maps through `i16` on both the serde and sqlx sides. Any other integer
//! is rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

use wishhub_core::AppError;

/// Priority tier of a wish item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[repr(i16)]
#[serde(try_from = "i16", into = "i16")]
pub enum ItemPriority {
    /// Nice to have.
    Low = 0,
    /// Would appreciate.
    Medium = 1,
    /// Really wants this.
    High = 2,
}

impl ItemPriority {
    /// Return the priority as a lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Default for ItemPriority {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for ItemPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<i16> for ItemPriority {
    type Error = AppError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Low),
            1 => Ok(Self::Medium),
            2 => Ok(Self::High),
            _ => Err(AppError::validation(format!(
                "Invalid item priority: {value}. Expected 0 (low), 1 (medium), or 2 (high)"
            ))),
        }
    }
}

impl From<ItemPriority> for i16 {
    fn from(priority: ItemPriority) -> i16 {
        priority as i16
    }
}
