//! User roles.

use serde::{Deserialize, Serialize};

/// Access role attached to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access: catalog management and seller administration.
    Admin,
    /// Day-to-day sales: browse, cart, checkout.
    Seller,
}

impl Role {
    /// Whether this role grants admin capabilities.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Seller => write!(f, "seller"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "seller" => Ok(Self::Seller),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}
