//! User domain types.

use serde::{Deserialize, Serialize};

/// User permission level.
///
/// Wire format inside tokens: `u8` (0 = User, 1 = Admin).
/// JSON format in API bodies: `"user"` / `"admin"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    User = 0,
    Admin = 1,
}

impl UserRole {
    /// Convert from `u8` wire value. Returns `None` for unknown values.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::User),
            1 => Some(Self::Admin),
            _ => None,
        }
    }

    /// Convert to `u8` wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}
