//! The action vocabulary checked by the resolver.
//!
//! `Permission` is a closed set of four concrete actions plus the `All`
//! wildcard. The resolver never matches on a specific concrete action, so
//! adding a variant here requires no change to resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArborError;

/// An action an entity may perform on a resource.
///
/// `All` is the wildcard: it is consulted only when an entity holds no
/// explicit decision for the concrete action being checked.
///
/// In TOML and JSON permissions are lowercase strings:
/// ```toml
/// allow = ["read", "create"]
/// deny = ["delete"]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Create,
    Read,
    Update,
    Delete,
    All,
}

impl Permission {
    /// The four concrete actions, excluding the wildcard.
    pub const ACTIONS: [Permission; 4] = [
        Permission::Create,
        Permission::Read,
        Permission::Update,
        Permission::Delete,
    ];

    /// Every permission value, wildcard last.
    pub const VALUES: [Permission; 5] = [
        Permission::Create,
        Permission::Read,
        Permission::Update,
        Permission::Delete,
        Permission::All,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Permission::Create => "create",
            Permission::Read => "read",
            Permission::Update => "update",
            Permission::Delete => "delete",
            Permission::All => "all",
        }
    }

    /// Return true for the `All` wildcard.
    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Permission::All)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = ArborError;

    /// Parse a permission name, case-insensitively. `"*"` is accepted as an
    /// alias for `all`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "create" => Ok(Permission::Create),
            "read" => Ok(Permission::Read),
            "update" => Ok(Permission::Update),
            "delete" => Ok(Permission::Delete),
            "all" | "*" => Ok(Permission::All),
            _ => Err(ArborError::UnknownPermission {
                value: s.to_string(),
            }),
        }
    }
}
